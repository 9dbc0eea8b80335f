//! Asset identifier helpers: `CHAIN.SYMBOL-CONTRACT` → display symbol, glyph
//! and long name.

/// Last dot-delimited segment of an asset identifier (`BTC.BTC` → `BTC`).
pub fn asset_symbol(asset: &str) -> &str {
    match asset.rsplit('.').next() {
        Some(last) if !last.is_empty() => last,
        _ => asset,
    }
}

/// Single-glyph icon for well-known assets, else the symbol's first letter.
pub fn asset_icon(asset: &str) -> String {
    let symbol = asset_symbol(asset).to_ascii_lowercase();
    let glyph = match symbol.as_str() {
        "btc" => "₿",
        "eth" => "Ξ",
        "rune" => "ᚱ",
        "usdc" => "$",
        "usdt" => "₮",
        "bnb" => "B",
        "atom" => "⚛",
        "doge" => "Ð",
        _ => {
            return symbol
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase().to_string())
                .unwrap_or_default()
        }
    };
    glyph.to_string()
}

fn asset_name(symbol: &str) -> Option<&'static str> {
    Some(match symbol {
        "BTC" => "Bitcoin",
        "ETH" => "Ethereum",
        "RUNE" => "THORChain",
        "USDC" => "USD Coin",
        "USDT" => "Tether",
        "BNB" => "Binance Coin",
        "ATOM" => "Cosmos",
        "DOGE" => "Dogecoin",
        "LTC" => "Litecoin",
        "BCH" => "Bitcoin Cash",
        "AVAX" => "Avalanche",
        "LUNA" => "Terra Luna",
        "DOT" => "Polkadot",
        "LINK" => "Chainlink",
        "UNI" => "Uniswap",
        "AAVE" => "Aave",
        "SUSHI" => "SushiSwap",
        "COMP" => "Compound",
        "MKR" => "Maker",
        "SNX" => "Synthetix",
        "CRV" => "Curve DAO Token",
        "YFI" => "yearn.finance",
        "WBTC" => "Wrapped Bitcoin",
        "WETH" => "Wrapped Ethereum",
        "DAI" => "Dai Stablecoin",
        _ => return None,
    })
}

/// Hover text: `"BTC - Bitcoin"`, or just the symbol when unknown.
pub fn asset_tooltip(asset: &str) -> String {
    let symbol = asset_symbol(asset).to_ascii_uppercase();
    match asset_name(&symbol) {
        Some(name) => format!("{} - {}", symbol, name),
        None => symbol,
    }
}

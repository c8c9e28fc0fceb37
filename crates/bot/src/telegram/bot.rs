//! Bot initialization.

use reqwest::ClientBuilder;
use teloxide::Bot;

use mediaferry_core::config;

/// Creates a Bot instance with a custom or default API URL.
///
/// The token comes from `BOT_TOKEN` (or `TELOXIDE_TOKEN`); `BOT_API_URL`
/// points the bot at a local Bot API server when set. The HTTP client
/// uses a long timeout so large uploads are not cut off mid-transfer.
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Missing token or invalid BOT_API_URL
pub fn create_bot() -> anyhow::Result<Bot> {
    let token = std::env::var("BOT_TOKEN")
        .or_else(|_| std::env::var("TELOXIDE_TOKEN"))
        .map_err(|_| anyhow::anyhow!("BOT_TOKEN is not set"))?;

    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;

    let bot = if let Ok(bot_api_url) = std::env::var("BOT_API_URL") {
        log::info!("Using custom Bot API URL: {}", bot_api_url);
        let url = url::Url::parse(&bot_api_url).map_err(|e| anyhow::anyhow!("Invalid BOT_API_URL: {}", e))?;
        Bot::with_client(token, client).set_api_url(url)
    } else {
        Bot::with_client(token, client)
    };

    Ok(bot)
}

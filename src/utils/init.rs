use crate::utils::config::{AppConfig, DEFAULT_CONFIG_PATH};
use anyhow::Context;
use log::{info, warn};
use std::sync::Arc;

pub const LOG_CONFIG_PATH: &str = "config/log4rs.yml";

pub async fn init() -> crate::error::Result<Arc<AppConfig>> {
    // 初始化日志系统
    log4rs::init_file(LOG_CONFIG_PATH, Default::default())
        .with_context(|| format!("Failed to initialise logging from {}", LOG_CONFIG_PATH))?;

    // 加载应用配置
    let config = AppConfig::load(DEFAULT_CONFIG_PATH)?;
    info!("应用配置加载完成");

    info!(
        "Completion provider: {} (model {})",
        config.provider.base_url, config.provider.model
    );
    // 启动时不校验密钥，缺失时由上游在鉴权阶段拒绝
    if config.provider.api_key.is_none() {
        warn!("{} is not set; chat requests will fail upstream", config.provider.api_key_env);
    }
    info!("CORS allow-list: {:?}", config.cors.allowed_origins);

    Ok(Arc::new(config))
}

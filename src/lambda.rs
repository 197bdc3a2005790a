#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use phone_formatter::adapters::proxy::{handle_proxy_request, ProxyRequest, ProxyResponse};
#[cfg(feature = "lambda")]
use phone_formatter::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use phone_formatter::{LambdaConfig, LibPhoneNumber, PhoneFormatter};

#[cfg(feature = "lambda")]
async fn function_handler(
    formatter: &PhoneFormatter<LibPhoneNumber>,
    event: LambdaEvent<ProxyRequest>,
) -> Result<ProxyResponse, Error> {
    tracing::debug!("Invocation {}", event.context.request_id);

    Ok(handle_proxy_request(formatter, &event.payload))
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    // 創建Lambda配置
    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    logger::init_lambda_logger(config.log_json);

    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    tracing::info!("Starting {} Lambda function", config.function_name);

    // 冷啟動時建立一次，之後的呼叫共用
    let formatter = PhoneFormatter::new(LibPhoneNumber::new());
    let formatter = &formatter;

    run(service_fn(move |event: LambdaEvent<ProxyRequest>| async move {
        function_handler(formatter, event).await
    }))
    .await
}

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use resulver_core::{
    Failure, MediatorBuilder, MediatorConfig, Outcome, ResultError, ResultHandler, ResultRequest,
};

struct Ping;

impl ResultRequest for Ping {
    type Content = ();
}

struct PingHandler;

#[async_trait]
impl ResultHandler<Ping> for PingHandler {
    async fn handle(&self, _request: Ping) -> Outcome {
        Ok(())
    }
}

struct GetValue;

impl ResultRequest for GetValue {
    type Content = i32;
}

struct GetValueHandler;

#[async_trait]
impl ResultHandler<GetValue> for GetValueHandler {
    async fn handle(&self, _request: GetValue) -> Outcome<i32> {
        Ok(42)
    }
}

/// Greets `name`; the handler turns down its first `n` calls.
struct Greet {
    name: String,
}

impl ResultRequest for Greet {
    type Content = String;
}

struct GreetHandler {
    refusals_left: AtomicU32,
}

impl GreetHandler {
    fn refusing(n: u32) -> Self {
        Self {
            refusals_left: AtomicU32::new(n),
        }
    }
}

#[async_trait]
impl ResultHandler<Greet> for GreetHandler {
    async fn handle(&self, request: Greet) -> Outcome<String> {
        if request.name.trim().is_empty() {
            return Err(ResultError::validation("name must not be empty").into());
        }

        let refused = self
            .refusals_left
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |left| left.checked_sub(1));
        if let Ok(left) = refused {
            return Err(Failure::new(
                ResultError::unauthorized(format!("not greeting yet ({} refusals left)", left - 1))
                    .with_title("greet"),
            ));
        }

        Ok(format!("Hello, {}!", request.name))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // (A) 設定: 引数があれば JSON ファイルから読む
    let config = match std::env::args().nth(1) {
        Some(path) => MediatorConfig::from_json_file(&path)?,
        None => MediatorConfig::default(),
    };
    info!(?config, "Configuration loaded");

    // (B) Handler を登録して Mediator を構築
    let mediator = MediatorBuilder::with_config(config)
        .register::<Ping, _>(PingHandler)?
        .register::<GetValue, _>(GetValueHandler)?
        .register::<Greet, _>(GreetHandler::refusing(1))?
        .expect::<Ping>()
        .expect::<GetValue>()
        .build()?;

    // (C) Request を送る
    match mediator.send_result(Ping).await {
        Ok(()) => info!("ping: ok"),
        Err(failure) => error!(%failure, "ping failed"),
    }

    match mediator.send_result(GetValue).await {
        Ok(value) => info!(value, "get_value: ok"),
        Err(failure) => error!(%failure, "get_value failed"),
    }

    for attempt in 1..=2 {
        let request = Greet {
            name: "resulver".to_string(),
        };
        match mediator.send_result(request).await {
            Ok(greeting) => info!(attempt, %greeting, "greet: ok"),
            Err(failure) => warn!(attempt, %failure, "greet failed"),
        }
    }

    // (D) 集計を JSON で出力
    println!("{}", serde_json::to_string_pretty(&mediator.counts())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use resulver_core::ErrorKind;

    fn greet(name: &str) -> Greet {
        Greet {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn greet_refuses_then_greets() {
        let handler = GreetHandler::refusing(1);

        let failure = handler.handle(greet("resulver")).await.unwrap_err();
        assert_eq!(failure.primary().kind, ErrorKind::Unauthorized);

        let greeting = handler.handle(greet("resulver")).await.unwrap();
        assert_eq!(greeting, "Hello, resulver!");
    }

    #[tokio::test]
    async fn greet_rejects_blank_name() {
        let failure = GreetHandler::refusing(0)
            .handle(greet("  "))
            .await
            .unwrap_err();
        assert_eq!(failure.primary().kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn concurrent_greets_never_underflow_refusals() {
        let handler = Arc::new(GreetHandler::refusing(3));

        let mut joins = Vec::new();
        for _ in 0..16 {
            let h = Arc::clone(&handler);
            joins.push(tokio::spawn(async move { h.handle(greet("x")).await }));
        }

        let mut refused = 0;
        for join in joins {
            if join.await.unwrap().is_err() {
                refused += 1;
            }
        }

        assert_eq!(refused, 3);
        assert_eq!(handler.refusals_left.load(Ordering::Acquire), 0);
    }
}

use std::future::Future;
use std::time::Duration;

use log::debug;

/// How often and how fast [`defend`] repeats its action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefendOptions {
    pub delay: Duration,
    pub retries: u32,
}

impl Default for DefendOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1000),
            retries: u32::MAX,
        }
    }
}

/// Runs `action` up to `options.retries` times, sleeping `options.delay`
/// after each run. The first error stops the loop and is returned.
pub async fn defend<F, Fut, E>(mut action: F, options: DefendOptions) -> Result<(), E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let mut retries = options.retries;
    while retries > 0 {
        action().await?;
        tokio::time::sleep(options.delay).await;
        retries -= 1;
        debug!("defend: {} runs left", retries);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn runs_exactly_retries_times_with_delay() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let options = DefendOptions {
            delay: Duration::from_millis(100),
            retries: 3,
        };
        let recorded = calls.clone();
        defend(
            move || {
                recorded.lock().unwrap().push(Instant::now());
                async { Ok::<(), ()>(()) }
            },
            options,
        )
        .await
        .unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 3);
        for pair in calls.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_millis(100));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn zero_retries_never_runs() {
        let mut count = 0;
        defend(
            || {
                count += 1;
                async { Ok::<(), ()>(()) }
            },
            DefendOptions {
                delay: Duration::from_millis(10),
                retries: 0,
            },
        )
        .await
        .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn error_stops_the_loop() {
        let mut count = 0;
        let result = defend(
            || {
                count += 1;
                let fail = count == 2;
                async move {
                    if fail {
                        Err("boom")
                    } else {
                        Ok(())
                    }
                }
            },
            DefendOptions {
                delay: Duration::from_millis(10),
                retries: 5,
            },
        )
        .await;
        assert_eq!(result, Err("boom"));
        assert_eq!(count, 2);
    }

    #[test]
    fn default_options() {
        let options = DefendOptions::default();
        assert_eq!(options.delay, Duration::from_millis(1000));
        assert_eq!(options.retries, u32::MAX);
    }
}

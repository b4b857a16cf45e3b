use crate::api::VocabClient;
use crate::config::Config;
use crate::logger;
use crate::models::{NetRequest, NetResponse};
use crossbeam_channel::{Receiver, Sender};
use std::thread;
use std::time::Duration;

/// Spawn the thread that talks to the vocabulary API. Requests come in over
/// `req_rx`, one at a time; responses go back over `res_tx` tagged with the
/// request token where one applies. The worker exits when the request
/// channel disconnects.
pub fn spawn_net_worker(
    config: Config,
    res_tx: Sender<NetResponse>,
    req_rx: Receiver<NetRequest>,
) -> thread::JoinHandle<()> {
    thread::Builder::new()
        .name("vocab-lessons::net_worker".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    logger::log(&format!("failed to start worker runtime: {e}"));
                    return;
                }
            };
            let client = VocabClient::new(config.api_base_url.clone());

            loop {
                match req_rx.recv() {
                    Ok(NetRequest::FetchLevels) => {
                        let result = rt
                            .block_on(client.levels())
                            .map_err(|e| e.to_string());
                        let _ = res_tx.send(NetResponse::Levels(result));
                    }
                    Ok(NetRequest::FetchCards { level, token }) => {
                        // Keeps the loading indicator visible for a beat; the
                        // indicator is already on screen before this request
                        // was sent.
                        thread::sleep(Duration::from_millis(config.card_delay_ms));
                        let result = rt
                            .block_on(client.cards(&level))
                            .map_err(|e| e.to_string());
                        let _ = res_tx.send(NetResponse::Cards {
                            level,
                            token,
                            result,
                        });
                    }
                    Ok(NetRequest::FetchDetail { word_id, token }) => {
                        let result = rt
                            .block_on(client.detail(word_id))
                            .map_err(|e| e.to_string());
                        let _ = res_tx.send(NetResponse::Detail { token, result });
                    }
                    Err(_) => {
                        logger::log("worker channel disconnected, exiting");
                        break;
                    }
                }
            }
        })
        .expect("Failed to spawn network worker thread")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_worker_exits_when_requests_disconnect() {
        let (res_tx, _res_rx) = unbounded();
        let (req_tx, req_rx) = unbounded::<NetRequest>();
        let handle = spawn_net_worker(Config::default(), res_tx, req_rx);
        drop(req_tx);
        handle.join().unwrap();
    }
}

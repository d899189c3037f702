use crate::gui_bridge::model::AnalysisModel;
use crate::workflow::runner::Runner;
use anyhow::Result;
use motorcore::catalog::RawMotorRecord;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn bridge_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

/// Hosts the analysis HTTP endpoint and re-runs the transform on record
/// sets submitted by clients.
pub struct AnalysisBridge {
    state: Arc<RwLock<AnalysisModel>>,
}

impl AnalysisBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        let state = Arc::new(RwLock::new(AnalysisModel::default()));
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let get_route = warp::path("analysis")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<AnalysisModel>>| warp::reply::json(&*state.read().unwrap()));

        let post_route = warp::path("analyze")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(runner_filter)
            .and_then(
                |records: Vec<RawMotorRecord>,
                 state: Arc<RwLock<AnalysisModel>>,
                 runner: Arc<Runner>| async move {
                    let model = AnalysisModel::from_result(&runner.execute(&records));
                    let reply = json!({
                        "status": "ok",
                        "admitted": model.admitted,
                        "skipped": model.skipped,
                    });
                    *state.write().unwrap() = model;
                    Ok::<_, warp::Rejection>(warp::reply::with_status(
                        warp::reply::json(&reply),
                        StatusCode::OK,
                    ))
                },
            );

        thread::spawn(move || {
            let routes = get_route.or(post_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(bridge_bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, model: &AnalysisModel) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = model.clone();
        println!(
            "[bridge] motors: {}, admitted: {}, skipped: {}",
            guard.motors.len(),
            guard.admitted,
            guard.skipped
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[bridge] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> AnalysisModel {
        self.state.read().unwrap().clone()
    }
}

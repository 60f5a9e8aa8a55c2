use std::sync::Arc;

use tokio::net::TcpListener;

use jobboard::application::ports::JobPostingRepository;
use jobboard::presentation::{AppState, create_router};

/// Serves the listing router on an ephemeral port and returns its base url.
pub async fn spawn_server(repository: Arc<dyn JobPostingRepository>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = create_router(AppState::new(repository));

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

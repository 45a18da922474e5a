use std::sync::Arc;

use taskgrid::cache::Period;
use taskgrid::client::Client;
use taskgrid::config::Config;
use taskgrid::notify::MemorySink;
use taskgrid::provider::Provider;
use taskgrid::session::{MemoryTokenStore, SessionGuard};

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Config::default();
    let sink = Arc::new(MemorySink::new());
    let store = Arc::new(MemoryTokenStore::new());
    let session = Arc::new(SessionGuard::new(store, sink.clone()));
    let client = Client::new(&config, session.clone());

    // Kick off the OTP dance, then paste the emailed code below
    client.send_otp("someone@example.com").await.unwrap();
    client.verify_otp("someone@example.com", "1234").await.unwrap();

    let today = chrono::Local::now().date_naive();
    let displayed = Period::month_of(today);
    let mut provider = Provider::new(client, sink, &config, displayed);

    let tasks = provider.tasks_for(displayed).await.unwrap();
    taskgrid::utils::print_month(today, &tasks, today);
}

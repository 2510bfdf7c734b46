#![allow(dead_code)]

pub mod fake_api;
pub mod medclass_env;
pub mod stub_server;

use std::time::{Duration, Instant};

use medclass::egui_app::controller::DashboardController;

/// Poll the controller until no request is in flight or `timeout` passes.
pub fn wait_for_jobs(controller: &mut DashboardController, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    loop {
        controller.poll();
        if !controller.any_job_in_flight() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
}

mod app;
mod content;
mod dispatch;
mod presentation;
mod trackers;

fn main() {
    app::run();
}

use shapegen_testing_fixtures::*;

fn main() {
    let _service = PingService::builder().build::<String, ()>();
}

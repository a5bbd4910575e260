use hoshi::{trace_init, App, Arrive, Event, Settings};
use winit::event_loop;

#[tokio::main]
async fn main() -> Arrive<()> {
    trace_init();
    let settings = Settings::load("Hoshi");
    let event_loop = event_loop::EventLoop::<Event>::with_user_event().build()?;
    event_loop.set_control_flow(event_loop::ControlFlow::Wait);
    let mut app = App::new(event_loop.create_proxy(), settings);
    event_loop.run_app(&mut app)?;
    Ok(())
}

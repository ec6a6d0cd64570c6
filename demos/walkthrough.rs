//! Headless walkthrough of a board session.
//!
//! Builds a small board the way a user would (add a node, drag connections out
//! of it, edit the spawned nodes) and prints the resulting slide deck.
//!
//! ```text
//! RUST_LOG=chainboard=debug cargo run --example walkthrough
//! ```

use chainboard::{Anchor, BoardController, CanvasConfig, GestureOutcome, NodeId, NodeKind, NodeUpdate, Point};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
default_title = "Plant Biology"
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let ctrl = BoardController::with_config(CanvasConfig::from_toml_str(CONFIG)?);
    ctrl.subscribe(|event| tracing::info!(?event, "board changed"));

    let topic = ctrl.add_node();
    ctrl.update_node(topic, NodeUpdate::Text("Photosynthesis".into()));
    ctrl.confirm_edit();

    let items = [
        (NodeKind::Definition, "Conversion of light energy into chemical energy", (800.0, 100.0)),
        (NodeKind::Question, "Why are leaves green?", (800.0, 300.0)),
        (NodeKind::Link, "https://en.wikipedia.org/wiki/Photosynthesis", (800.0, 500.0)),
    ];
    for (kind, text, (x, y)) in items {
        if let Some(node) = spawn_from(&ctrl, topic, Point::new(x, y)) {
            ctrl.update_node(node, NodeUpdate::Kind(kind));
            ctrl.update_node(node, NodeUpdate::Text(text.into()));
            ctrl.confirm_edit();
        }
    }

    // a second topic, connected to the first by releasing over it
    let second = ctrl.create_node(Point::new(200.0, 700.0), None);
    ctrl.update_node(second, NodeUpdate::Text("Cellular respiration".into()));
    ctrl.begin_connection_drag(second, Anchor::Top);
    let outcome = ctrl.end_gesture(Some(topic));
    tracing::info!(?outcome, "connected topics");

    let mut deck = ctrl.present();
    println!("{}", ctrl.with_board(|b| b.title().to_string()));
    loop {
        let slide = deck.current();
        println!("\n[{}] {}\n{}", deck.progress_label(), slide.title, slide.body);
        if !deck.next() {
            break;
        }
    }
    Ok(())
}

/// Drag a connection out of `from` and release it over empty canvas.
fn spawn_from(ctrl: &BoardController, from: NodeId, release: Point) -> Option<NodeId> {
    ctrl.begin_connection_drag(from, Anchor::Right);
    ctrl.on_pointer_move(release);
    match ctrl.end_gesture(ctrl.node_at(release)) {
        GestureOutcome::Spawned { node, .. } => Some(node),
        other => {
            tracing::warn!(?other, "release did not spawn a node");
            None
        }
    }
}

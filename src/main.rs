use spade_theme::{init_logging, start};

fn main() {
	init_logging();
	start();
}

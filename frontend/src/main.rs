#[cfg(target_arch = "wasm32")]
fn main() {
    classline_frontend::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // The app is a browser SPA; the host binary exists so `cargo run` has a
    // target during development.
    eprintln!("classline-frontend targets wasm32; build with trunk instead");
}

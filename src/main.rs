// This binary crate is intentionally minimal.
// All neural network logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example xor
fn main() {
    println!("cobalt-nn: a minimal dense feed-forward neural network engine.");
    println!("Run `cargo run --example xor` to see the XOR demo.");
}

use add_interpolation::{compute_available_action, CancellationToken, Document};
use csharp_syntax::Span;
use std::fs;

#[tokio::main]
async fn main() {
    let mut args = std::env::args().skip(1);
    let path = args.next().expect("Usage: interpolate <file.cs> <offset>");
    let offset: u32 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .expect("Usage: interpolate <file.cs> <offset>");

    let source = fs::read_to_string(&path).expect("Failed to read file");
    let document = Document::new(source);
    let cancel = CancellationToken::new();

    match compute_available_action(&document, Span::empty(offset), &cancel).await {
        Some(action) => match action.apply(&cancel) {
            Some(snapshot) => println!("{}", snapshot.text()),
            None => eprintln!("{} failed", action.label()),
        },
        None => eprintln!("No string literal at offset {}", offset),
    }
}

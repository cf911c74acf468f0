//! Entry point for the WASM application

pub fn main() {
    paper_parser_frontend::start();
}

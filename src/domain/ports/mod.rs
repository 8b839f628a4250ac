mod markdown_port;

pub use markdown_port::MarkdownPort;

//! MD5 Engine Basic Example
//!
//! Minimal usage: `let digest = md5_engine::transform(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    let data = b"Hello, World!";
    let digest = md5_engine::transform(data);

    println!("Data:   {:?}", String::from_utf8_lossy(data));
    println!("Digest: {}", hex::encode(digest));
}

use fieldline::fields::{HeaderField, HeaderSection};

fn main() {
    env_logger::init();

    // a request section the way a proxy would assemble it
    let mut section = HeaderSection::with_capacity(8);

    section.add(HeaderField::from_static("Host", "example.com"));
    let auth = section.add(HeaderField::from_static("Authorization", "Bearer dev-token"));
    section.add(HeaderField::from_static("Accept", "*/*"));
    section.add(HeaderField::from_static("Set-Cookie", "theme=dark"));
    section.add(HeaderField::from_static("Set-Cookie", "lang=en"));

    log::info!("assembled {} header fields", section.len());

    if let Some((_, host)) = section.find("host") {
        log::info!("routing by {host}");
    }

    // strip credentials before forwarding
    section.remove(auth);

    for (_, field) in &section {
        println!("> {field}");
    }

    // RUST_LOG=debug shows the drop count
    section.clear();
}

use morphfield::Intro;

fn main() {
    if let Err(e) = Intro::new().run() {
        eprintln!("intro failed: {}", e);
        std::process::exit(1);
    }
}

fn main() {
    // Validate the embedded data file at compile time.
    validate_toml(
        "src/data/default_data.toml",
        include_str!("src/data/default_data.toml"),
    );
    println!("cargo:rerun-if-changed=src/data/default_data.toml");
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}

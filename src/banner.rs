/// Display a banner with version and useful information
pub fn print_banner(component: &str) {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");

    let banner = format!(
        r#"
 ██████ ██   ██  █████  ████████     ██████  ██████  ██ ██████   ██████  ███████
██      ██   ██ ██   ██    ██        ██   ██ ██   ██ ██ ██   ██ ██       ██
██      ███████ ███████    ██        ██████  ██████  ██ ██   ██ ██   ███ █████
██      ██   ██ ██   ██    ██        ██   ██ ██   ██ ██ ██   ██ ██    ██ ██
 ██████ ██   ██ ██   ██    ██        ██████  ██   ██ ██ ██████   ██████  ███████

╭────────────────────────────────────────────────────────╮
│  {} ({})
│  Version: {}
╰────────────────────────────────────────────────────────╯

"#,
        name, component, version
    );

    println!("{}", banner);
}

// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
 ╔╦╗╔═╗╔╦╗╔═╗╦ ╦╔═╗╦═╗╔╦╗╦ ╦╦ ╦
 ║║║║╣ ║║║║╣ ║║║║ ║╠╦╝ ║ ╠═╣╚╦╝
 ╩ ╩╚═╝╩ ╩╚═╝╚╩╝╚═╝╩╚═ ╩ ╩ ╩ ╩

    Meme Potential Evaluator
"#;
    println!("{}", banner);
}

// src/main.rs - Demo: render the sample menu in both languages
use guest_menu::attendance::AttendancePage;
use guest_menu::core::constants::{APP_TITLE, VERSION};
use guest_menu::i18n::context;
use guest_menu::{compose_all, init_with_config, parse_menu, t, BilingualText, Config, Result};

const SAMPLE_MENU: &str = include_str!("menu/sample_menu.json");

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::load_default()?;
    init_with_config(&config)?;
    log::info!("{} v{} starting in '{}'", APP_TITLE, VERSION, config.language);

    let items = parse_menu(SAMPLE_MENU)?;

    print_menu(&items);

    // Switch to the other language and render the same records again.
    context::switch(context::active().toggled());
    print_menu(&items);

    print_attendance(config.reveal_step_ms);

    Ok(())
}

fn print_menu(items: &[guest_menu::MenuItem]) {
    println!("\n=== {} / {} ===", t!("brand.name"), t!("menu.heading"));
    for card in compose_all(items, context::active()) {
        println!("- {}", card.title);
        println!("    {}", card.blurb);
        println!("    {}  [{}]", card.price_line, card.image);
    }
}

fn print_attendance(step_ms: u64) {
    let page = AttendancePage::for_today(BilingualText::new(
        "Welcome back, Hanna!",
        "እንኳን ደህና መጡ፣ ሃና!",
    ));
    let view = page.render(context::active(), step_ms);

    println!("\n=== {} ===", view.heading);
    println!("{}", view.date_line);
    for frame in &view.frames {
        println!("  +{:>4}ms {}", frame.at_ms, frame.grapheme);
    }
}

use iced_gloss::app::{self, Flags};
use iced_gloss::ui::theming::ThemeMode;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        theme: args
            .opt_value_from_str::<_, ThemeMode>("--theme")
            .unwrap_or(None),
    };

    app::run(flags)
}

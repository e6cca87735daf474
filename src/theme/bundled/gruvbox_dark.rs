//! Gruvbox Dark - Retro groove color scheme

pub const THEME: &str = r##"# Gruvbox Dark theme for abacus
# Retro groove color scheme

[meta]
name = "Gruvbox Dark"
version = 1

[ui]
background = "#282828"
foreground = "#ebdbb2"
border = "#665c54"
border_focused = "#fabd2f"
title = "#689d6a"
status_bar = "#ebdbb2"
muted = "#928374"

[display]
current = "#ebdbb2"
previous = "#928374"

[keypad]
digit = "#ebdbb2"
operator = "#83a598"
equals = "#b8bb26"
edit = "#fb4934"
pressed = "#504945"

[history]
record = "#ebdbb2"
placeholder = "#fe8019"

[logs]
error = "#fb4934"
warn = "#fabd2f"
info = "#b8bb26"
debug = "#928374"
"##;

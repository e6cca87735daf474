//! Terminal ANSI - Uses your terminal's native ANSI colors

pub const THEME: &str = r##"# Terminal ANSI theme for abacus
# Uses your terminal's native ANSI colors
#
# "ansi:X" colors follow the terminal palette:
# - ansi:0-7 = standard colors, ansi:8-15 = bright variants
# - ansi:fg / ansi:bg = terminal default foreground / background

[meta]
name = "Terminal ANSI"
version = 1

[ui]
background = "ansi:bg"
foreground = "ansi:fg"
border = "ansi:8"
border_focused = "ansi:3"
title = "ansi:6"
status_bar = "ansi:fg"
muted = "ansi:8"

[display]
current = "ansi:fg"
previous = "ansi:8"

[keypad]
digit = "ansi:fg"
operator = "ansi:4"
equals = "ansi:2"
edit = "ansi:1"
pressed = "ansi:8"

[history]
record = "ansi:fg"
placeholder = "ansi:3"

[logs]
error = "ansi:1"
warn = "ansi:3"
info = "ansi:2"
debug = "ansi:8"
"##;

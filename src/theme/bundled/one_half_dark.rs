//! One Half Dark - A clean, modern dark theme (default)

pub const THEME: &str = r##"# One Half Dark theme for abacus
# A clean, modern dark theme (default)

[meta]
name = "One Half Dark"
version = 1

[ui]
background = "#282c34"
foreground = "#dcdfe4"
border = "#5d677a"
border_focused = "#e5c07b"
title = "#56b6c2"
status_bar = "#dcdfe4"
muted = "#5d677a"

[display]
current = "#dcdfe4"
previous = "#5d677a"

[keypad]
digit = "#dcdfe4"
operator = "#61afef"
equals = "#98c379"
edit = "#e06c75"
pressed = "#474e5d"

[history]
record = "#dcdfe4"
placeholder = "#e5c07b"

[logs]
error = "#e06c75"
warn = "#e5c07b"
info = "#98c379"
debug = "#5d677a"
"##;

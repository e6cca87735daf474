//! Nord - Arctic, bluish color palette

pub const THEME: &str = r##"# Nord theme for abacus
# Arctic, bluish color palette

[meta]
name = "Nord"
version = 1

[ui]
background = "#2e3440"
foreground = "#d8dee9"
border = "#4c566a"
border_focused = "#ebcb8b"
title = "#88c0d0"
status_bar = "#d8dee9"
muted = "#4c566a"

[display]
current = "#eceff4"
previous = "#81a1c1"

[keypad]
digit = "#d8dee9"
operator = "#81a1c1"
equals = "#a3be8c"
edit = "#bf616a"
pressed = "#434c5e"

[history]
record = "#d8dee9"
placeholder = "#ebcb8b"

[logs]
error = "#bf616a"
warn = "#ebcb8b"
info = "#a3be8c"
debug = "#4c566a"
"##;

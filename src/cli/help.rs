use crate::terminal::{BOX_WIDTH, box_bottom, box_line, box_line_center, box_opt, box_top};

const OPTIONS: &[(&str, &str)] = &[
    ("  -l, --length <N>", "Password length, 4 to 24"),
    ("  -L, --lower", "Include lowercase letters"),
    ("  -U, --upper", "Include uppercase letters"),
    ("  -d, --digits", "Include digits"),
    ("  -s, --symbols", "Include symbols !@#$%^&*()_+"),
    ("  -a, --all", "Include every character class"),
    ("  -b, --board", "Copy to clipboard instead of printing"),
    ("      --light", "Use the light palette"),
    ("      --dark", "Use the dark palette"),
    ("  -h, --help", "Print this help"),
    ("  -v, --version", "Print version"),
];

pub fn help_lines() -> Vec<String> {
    let mut lines = vec![
        box_top("Passform", BOX_WIDTH),
        box_line_center("Password generator form", BOX_WIDTH),
        box_line("", BOX_WIDTH),
        box_line("MODES:", BOX_WIDTH),
        box_line("  Run without class or length flags to open the form.", BOX_WIDTH),
        box_line("  Pass a length and classes to print one password.", BOX_WIDTH),
        box_line("", BOX_WIDTH),
        box_line("USAGE:", BOX_WIDTH),
        box_line("  passform [OPTIONS]", BOX_WIDTH),
        box_line("", BOX_WIDTH),
        box_line("OPTIONS:", BOX_WIDTH),
    ];
    for (flag, desc) in OPTIONS {
        lines.extend(box_opt(flag, desc, BOX_WIDTH));
    }
    lines.extend([
        box_line("", BOX_WIDTH),
        box_line("SETTINGS:", BOX_WIDTH),
        box_line("  ~/.config/passform/settings.toml", BOX_WIDTH),
        box_line("  PASSFORM_THEME=auto|light|dark  PASSFORM_LOG=<file>", BOX_WIDTH),
        box_bottom(BOX_WIDTH),
    ]);
    lines
}

pub fn print_help() {
    for line in help_lines() {
        println!("{line}");
    }
}

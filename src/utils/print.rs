use crate::analysis::patterns::SIMD_EXTENSIONS;
use colored::*;
use terminal_size::{Width, terminal_size};

fn visible_len(styled: &str) -> usize {
    String::from_utf8_lossy(&strip_ansi_escapes::strip(styled.as_bytes()))
        .chars()
        .count()
}

fn colorize_numbers(text: &str) -> String {
    let mut result = String::new();
    let mut chars = text.chars().peekable();
    while let Some(&c) = chars.peek() {
        let mut run = String::new();
        if c.is_ascii_digit() {
            while let Some(&c) = chars.peek() {
                if c.is_ascii_digit() || c == ',' || c == '.' {
                    run.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
            result.push_str(&run.magenta().to_string());
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_ascii_digit() {
                    break;
                }
                run.push(c);
                chars.next();
            }
            result.push_str(&run.bright_blue().to_string());
        }
    }
    result
}

fn colorize_line(line: &str, use_color: bool) -> String {
    if !use_color {
        return line.to_string();
    }

    if let Some(idx) = line.find("Most common:") {
        let mut result = String::new();
        result.push_str(&line[..idx]);
        result.push_str(&"Most common:".italic().bright_green().to_string());
        let rest = line[idx + "Most common:".len()..].trim_start();

        let segments: Vec<String> = rest
            .split(", ")
            .map(|entry| match entry.split_once(" (") {
                Some((instr, count)) => format!(
                    "{}{}{}{}",
                    instr.bold().cyan(),
                    " (".white(),
                    count.trim_end_matches(')').magenta(),
                    ")".white()
                ),
                None => entry.bold().cyan().to_string(),
            })
            .collect();
        result.push(' ');
        result.push_str(&segments.join(", "));
        return result;
    }

    if line.starts_with("Total SIMD share")
        || line.starts_with("No instructions")
        || line.starts_with("Iterations")
    {
        return line.bold().yellow().to_string();
    }

    let trimmed = line.trim_start();
    if trimmed.starts_with("avg ") || trimmed.starts_with("stddev ") {
        let indent = &line[..line.len() - trimmed.len()];
        if let Some((key, value)) = trimmed.split_once(' ') {
            return format!("{}{} {}", indent, key.bright_white(), value.magenta());
        }
    }

    if let Some(colon_idx) = line.find(": ") {
        let ext = line[..colon_idx].trim();
        let rest = &line[colon_idx + 2..];
        return format!("{}: {}", ext.bold().cyan(), colorize_numbers(rest));
    }

    line.white().to_string()
}

/// Lay out `lines` inside an ASCII box, with a horizontal rule after each
/// index in `separator_indices`. Falls back to an open layout when the box
/// would not fit in `terminal_width`.
pub fn render_boxed_section(
    lines: &[String],
    separator_indices: &[usize],
    title: Option<&str>,
    terminal_width: usize,
    use_color: bool,
) -> Vec<String> {
    let mut out = Vec::new();
    let paint = |s: String| {
        if use_color { s.white().to_string() } else { s }
    };

    let mut content_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    if let Some(title) = title {
        content_width = content_width.max(title.chars().count());
    }
    content_width = content_width.max(40);

    let box_width = content_width + 2;
    let use_box = terminal_width >= box_width + 2;

    if use_box {
        let rule = format!("+{:-<width$}+", "", width = box_width);
        match title {
            Some(title) => {
                let dash_total = box_width.saturating_sub(title.chars().count());
                let left_dash = dash_total / 2;
                let right_dash = dash_total - left_dash;
                let title = if use_color {
                    title.bold().yellow().to_string()
                } else {
                    title.to_string()
                };
                out.push(paint(format!(
                    "+{:-<left$}{}{:->right$}+",
                    "",
                    title,
                    "",
                    left = left_dash,
                    right = right_dash
                )));
            }
            None => out.push(paint(rule.clone())),
        }
        for (i, line) in lines.iter().enumerate() {
            let styled = colorize_line(line, use_color);
            let pad = " ".repeat(content_width.saturating_sub(visible_len(&styled)));
            if use_color {
                out.push(format!("{}{}{}{}", "| ".white(), styled, pad, " |".white()));
            } else {
                out.push(format!("| {}{} |", styled, pad));
            }
            if separator_indices.contains(&i) {
                out.push(paint(rule.clone()));
            }
        }
        out.push(paint(rule));
    } else {
        let rule = "-".repeat(content_width);
        if let Some(title) = title {
            if use_color {
                out.push(title.bold().yellow().to_string());
            } else {
                out.push(title.to_string());
            }
            out.push(paint(rule.clone()));
        }
        for (i, line) in lines.iter().enumerate() {
            out.push(colorize_line(line, use_color));
            if separator_indices.contains(&i) {
                out.push(paint(rule.clone()));
            }
        }
        out.push(paint(rule));
    }
    out
}

/// Flatten blocks and summary into one boxed section and print it to
/// stdout. Colour is used only when stdout is a terminal.
pub fn print_boxed_section(blocks: &[Vec<String>], summary_lines: &[String], title: Option<&str>) {
    let mut all_lines: Vec<String> = Vec::new();
    let mut separator_indices: Vec<usize> = Vec::new();
    for block in blocks {
        all_lines.extend(block.iter().filter(|l| !l.is_empty()).cloned());
        if !all_lines.is_empty() {
            separator_indices.push(all_lines.len() - 1);
        }
    }
    if summary_lines.is_empty() {
        separator_indices.pop();
    }
    all_lines.extend(summary_lines.iter().cloned());

    let terminal_width = if let Some((Width(w), _)) = terminal_size() {
        w as usize
    } else {
        80
    };
    let use_color = atty::is(atty::Stream::Stdout);

    for line in render_boxed_section(
        &all_lines,
        &separator_indices,
        title,
        terminal_width,
        use_color,
    ) {
        println!("{}", line);
    }
}

/// List the compiled-in SIMD mnemonic table, one extension per row.
pub fn print_instruction_sets() {
    let use_color = atty::is(atty::Stream::Stdout);
    let total: usize = SIMD_EXTENSIONS.iter().map(|e| e.mnemonics.len()).sum();

    let mut lines = Vec::new();
    for ext in SIMD_EXTENSIONS {
        lines.push(format!(
            "{:<8} : {} ({} mnemonics)",
            ext.name,
            ext.description,
            ext.mnemonics.len()
        ));
        lines.push(format!("    {}", ext.mnemonics.join(" ")));
    }

    if use_color {
        println!("{}", "Recognized SIMD instruction sets:".bold().bright_magenta());
    } else {
        println!("Recognized SIMD instruction sets:");
    }
    for (i, line) in lines.iter().enumerate() {
        if !use_color {
            println!("{}", line);
        } else if i % 2 == 0 {
            match line.split_once(" : ") {
                Some((name, desc)) => println!(
                    "{}{}{}",
                    name.bold().bright_blue(),
                    " : ".bright_black(),
                    desc.bright_white()
                ),
                None => println!("{}", line),
            }
        } else {
            println!("{}", line.dimmed());
        }
    }
    println!("{} mnemonics in total (AVX-512 not included)", total);
}

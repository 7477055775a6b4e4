use std::fmt::Display;

use colored::*;
use runconf_common::model::{SystemInfo, VlanRecord};
use serde::Serialize;
use tracing::info;

use crate::terminal::{colors, format, logging::PRINT_TARGET};

pub const TOTAL_WIDTH: usize = 64;

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = console::measure_text_width(&formatted);

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn aligned_line<V>(key: &str, value: V, key_width: usize)
where
    V: Display + WithDefaultColor,
{
    let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    let output: String = format!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
    print(&output);
}

/// Width of the longest key, used to line up the `:` separators.
pub fn key_width(pairs: &[(String, ColoredString)]) -> usize {
    pairs.iter().map(|(key, _)| key.len()).max().unwrap_or(0)
}

/// One `├─ key....: value` row per pair, the last one closing the branch.
pub fn branch_lines(pairs: &[(String, ColoredString)], key_width: usize) {
    let Some(last_idx) = pairs.len().checked_sub(1) else {
        return;
    };

    for (idx, (key, value)) in pairs.iter().enumerate() {
        let branch: &str = if idx == last_idx { "└─" } else { "├─" };
        let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
        print(&format!(
            " {} {}{}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn vlans(vlans: &[VlanRecord]) {
    for (idx, vlan) in vlans.iter().enumerate() {
        tree_head(idx, &format::vlan_title(vlan));
        let pairs = format::vlan_to_key_value_pair(vlan);
        branch_lines(&pairs, key_width(&pairs));
    }
}

pub fn system(info: &SystemInfo) {
    let pairs = format::system_to_key_value_pair(info);
    let width: usize = key_width(&pairs);
    for (key, value) in pairs {
        aligned_line(&key, value, width);
    }
}

pub fn json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    print(&serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn no_results() {
    print(&format!("{}", "No VLANs found".red().bold()));
}

pub fn end_of_program(q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}

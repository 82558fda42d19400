use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
      ██████╗ ███████╗██╗   ██╗ █████╗ ██████╗ ██████╗
      ██╔══██╗██╔════╝██║   ██║██╔══██╗██╔══██╗██╔══██╗
      ██████╔╝█████╗  ██║   ██║███████║██║  ██║██║  ██║
      ██╔══██╗██╔══╝  ╚██╗ ██╔╝██╔══██║██║  ██║██║  ██║
      ██║  ██║███████╗ ╚████╔╝ ██║  ██║██████╔╝██████╔╝
      ╚═╝  ╚═╝╚══════╝  ╚═══╝  ╚═╝  ╚═╝╚═════╝ ╚═════╝
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.truecolor(83, 179, 203)));
}

//! Menu dispatch for the geometry calculator drill.
//!
//! A [`Menu`] is an ordered mapping from a numeric selection key to a
//! handler capability, plus one designated exit entry. The run loop
//! renders the option list, reads one selection, and dispatches; anything
//! it does not recognize (out-of-range or non-numeric) earns a retry
//! message and another pass through the loop. Handlers solicit whatever
//! further input they need and print their own results, so no handler
//! observes another's state.

use crate::domain::parser;
use crate::domain::services::{circle_area, circle_perimeter, euclidean_norm, rectangle_area};
use crate::presentation::{ui, Console};
use std::io;

pub type MenuHandler = Box<dyn Fn(&mut Console) -> io::Result<()>>;

pub enum MenuAction {
    /// Invoke the handler, then show the menu again.
    Run(MenuHandler),
    /// Print the farewell and leave the loop.
    Exit { farewell: String },
}

pub struct MenuEntry {
    pub key: u32,
    pub label: String,
    pub action: MenuAction,
}

/// Fixed-option console menu with an open key-to-handler mapping.
///
/// Options are registered at construction time; the dispatch loop never
/// grows a conditional chain when entries are added.
pub struct Menu {
    banner: Option<String>,
    entries: Vec<MenuEntry>,
}

impl Menu {
    pub fn new() -> Self {
        Self {
            banner: None,
            entries: Vec::new(),
        }
    }

    /// Sets a one-time banner printed before the first menu render.
    pub fn banner(mut self, text: &str) -> Self {
        self.banner = Some(text.to_string());
        self
    }

    /// Registers a handler under a selection key.
    pub fn option(mut self, key: u32, label: &str, handler: MenuHandler) -> Self {
        self.entries.push(MenuEntry {
            key,
            label: label.to_string(),
            action: MenuAction::Run(handler),
        });
        self
    }

    /// Registers the exit key and its farewell line.
    pub fn exit_option(mut self, key: u32, label: &str, farewell: &str) -> Self {
        self.entries.push(MenuEntry {
            key,
            label: label.to_string(),
            action: MenuAction::Exit {
                farewell: farewell.to_string(),
            },
        });
        self
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Runs the dispatch loop until the exit entry is chosen or input ends.
    ///
    /// Unrecognized selections print `Try again` and re-display the menu;
    /// they never terminate the loop or fail.
    pub fn run(&self, console: &mut Console) -> io::Result<()> {
        if let Some(banner) = &self.banner {
            console.println(banner)?;
        }
        loop {
            console.print(&ui::menu_text(self))?;
            let Some(line) = console.read_line()? else {
                return Ok(());
            };
            let entry = parser::parse_selection(&line)
                .and_then(|key| self.entries.iter().find(|entry| entry.key == key));
            match entry {
                Some(entry) => {
                    tracing::debug!(key = entry.key, label = %entry.label, "dispatching selection");
                    match &entry.action {
                        MenuAction::Run(handler) => handler(console)?,
                        MenuAction::Exit { farewell } => {
                            console.println(farewell)?;
                            return Ok(());
                        }
                    }
                }
                None => {
                    tracing::debug!(input = %line, "unrecognized selection");
                    console.println("Try again")?;
                }
            }
        }
    }

    /// The six-option geometry calculator.
    pub fn calculator() -> Menu {
        Menu::new()
            .banner("Welcome to my calculator!")
            .option(1, "Calc distance between 2 points", Box::new(option_distance))
            .option(2, "Calc hypotenuse of triangle", Box::new(option_hypotenuse))
            .option(3, "Calc area and perimeter of circle", Box::new(option_circle))
            .option(4, "Calc area of rectangle", Box::new(option_rectangle))
            .option(5, "Calc area of square", Box::new(option_square))
            .exit_option(6, "Exit", "Goodbye!")
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

fn option_distance(console: &mut Console) -> io::Result<()> {
    let Some((x1, y1)) = console.prompt_integer_pair("Enter point1 coordinates: ")? else {
        return Ok(());
    };
    let Some((x2, y2)) = console.prompt_integer_pair("Enter point2 coordinates: ")? else {
        return Ok(());
    };
    // Same norm as the hypotenuse, applied to the coordinate deltas.
    let distance = euclidean_norm((x2 - x1) as f64, (y2 - y1) as f64);
    console.println(&format!("Distance is {distance:.2}"))
}

fn option_hypotenuse(console: &mut Console) -> io::Result<()> {
    let Some((a, b)) = console.prompt_integer_pair("Enter 2 sides of the triangle: ")? else {
        return Ok(());
    };
    let hypotenuse = euclidean_norm(a as f64, b as f64);
    console.println(&format!("Hypotenuse is {hypotenuse:.2}"))
}

fn option_circle(console: &mut Console) -> io::Result<()> {
    let Some(radius) = console.prompt_integer("Enter circle radius: ")? else {
        return Ok(());
    };
    console.println(&format!("Perimeter: {:.2}", circle_perimeter(radius)))?;
    console.println(&format!("Area: {:.2}", circle_area(radius)))
}

fn option_rectangle(console: &mut Console) -> io::Result<()> {
    let Some(length) = console.prompt_integer("Enter rectangle length: ")? else {
        return Ok(());
    };
    let Some(width) = console.prompt_integer("Enter rectangle width: ")? else {
        return Ok(());
    };
    console.println(&format!(
        "The area of the rectangle is {}",
        rectangle_area(length, width)
    ))
}

fn option_square(console: &mut Console) -> io::Result<()> {
    let Some(side) = console.prompt_integer("Enter length of square side: ")? else {
        return Ok(());
    };
    // A square is a rectangle with both sides equal.
    console.println(&format!(
        "The area of the square is {}",
        rectangle_area(side, side)
    ))
}

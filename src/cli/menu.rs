use std::io::{BufRead, Write};

use crate::cli::input::{Prompter, is_plausible_phone};
use crate::cli::render::{render_error, render_events, render_summaries, render_zone};
use crate::domain::directory::network_directory::NetworkDirectory;
use crate::domain::utils::id::ZoneId;
use crate::domain::zone::events::ZoneEvent;
use crate::domain::zone::network_zone::NetworkZone;
use crate::error::Result;

const MENU: [&str; 9] = [
    "1. Add Tower",
    "2. Register User",
    "3. Move User",
    "4. Make Call",
    "5. End Call",
    "6. Switch Network",
    "7. Display Current Network Info",
    "8. Display All Network Summary",
    "9. Quit",
];

/// Whether the menu loop should keep going after a command.
enum Flow {
    Continue,
    Quit,
}

/// An interactive session over a network directory.
pub struct Session<R: BufRead, W: Write> {
    prompter: Prompter<R, W>,
    directory: NetworkDirectory,
    current: Option<ZoneId>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(directory: NetworkDirectory, reader: R, writer: W) -> Self {
        let current = directory.first_network_name().cloned();
        Self { prompter: Prompter::new(reader, writer), directory, current }
    }

    pub fn directory(&self) -> &NetworkDirectory {
        &self.directory
    }

    pub fn into_parts(self) -> (NetworkDirectory, W) {
        (self.directory, self.prompter.into_writer())
    }

    /// Asks how many networks to create and reads each name and switching-center position.
    pub fn create_networks(&mut self) -> Result<()> {
        let Some(count) = self.prompter.read_number::<usize>("Enter the number of networks to create: ")? else {
            return Ok(());
        };

        for i in 0..count {
            let Some(name) = self.prompter.read_line(&format!("Enter name for Network {}: ", i + 1))? else {
                return Ok(());
            };
            if name.is_empty() {
                self.prompter.say("Network name cannot be empty. Skipping network creation.")?;
                continue;
            }
            let Some(x) = self.prompter.read_number::<f64>(&format!("Enter MSC X-coordinate for Network '{}': ", name))? else {
                return Ok(());
            };
            let Some(y) = self.prompter.read_number::<f64>(&format!("Enter MSC Y-coordinate for Network '{}': ", name))? else {
                return Ok(());
            };

            match self.directory.add_network(&name, (x, y).into()) {
                Ok(zone) => {
                    let id = zone.get_id().clone();
                    self.prompter.say(&format!("Network '{}' created.", id))?;
                    if self.current.is_none() {
                        self.current = Some(id);
                    }
                }
                Err(e) => self.prompter.say(&render_error(&e))?,
            }
        }
        Ok(())
    }

    /// Runs the menu until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        let Some(current) = self.current.clone() else {
            self.prompter.say("No networks created. Exiting.")?;
            return Ok(());
        };
        self.prompter.say(&format!("\nCurrently active network: {}", current))?;

        loop {
            let Some(current) = self.current.clone() else {
                return Ok(());
            };

            self.prompter.say("\n--- Main Menu ---")?;
            self.prompter.say(&format!("Active Network: {}", current))?;
            for entry in MENU {
                self.prompter.say(entry)?;
            }

            let Some(choice) = self.prompter.read_line("Enter your choice: ")? else {
                return Ok(());
            };

            let flow = match choice.as_str() {
                "1" => self.add_tower(&current)?,
                "2" => self.register_user(&current)?,
                "3" => self.move_user(&current)?,
                "4" => self.make_call(&current)?,
                "5" => self.end_call(&current)?,
                "6" => self.switch_network()?,
                "7" => self.display_current(&current)?,
                "8" => {
                    let summaries = render_summaries(&self.directory.list_network_summaries());
                    self.prompter.say(&summaries)?;
                    Some(Flow::Continue)
                }
                "9" => {
                    self.prompter.say("Exiting Mobile Network Simulation. Goodbye!")?;
                    Some(Flow::Quit)
                }
                _ => {
                    self.prompter.say("Invalid choice. Please try again.")?;
                    Some(Flow::Continue)
                }
            };

            match flow {
                Some(Flow::Continue) => {}
                Some(Flow::Quit) | None => return Ok(()),
            }
        }
    }

    fn zone_mut(&mut self, current: &ZoneId) -> Option<&mut NetworkZone> {
        self.directory.get_network_mut(current.as_str())
    }

    /// Reports the outcome of a core call. Core errors never end the session.
    fn report<T>(&mut self, outcome: Result<T>, render: impl FnOnce(T) -> String) -> Result<Option<Flow>> {
        match outcome {
            Ok(value) => self.prompter.say(&render(value))?,
            Err(e) => self.prompter.say(&render_error(&e))?,
        }
        Ok(Some(Flow::Continue))
    }

    fn add_tower(&mut self, current: &ZoneId) -> Result<Option<Flow>> {
        let Some(name) = self.prompter.read_line("Enter tower name: ")? else {
            return Ok(None);
        };
        if name.is_empty() {
            self.prompter.say("Tower name cannot be empty.")?;
            return Ok(Some(Flow::Continue));
        }
        let Some(position) = self.prompter.read_position("Enter tower position (x,y): ")? else {
            return Ok(None);
        };
        let Some(height) = self.prompter.read_number::<f64>("Enter tower height (e.g., 50): ")? else {
            return Ok(None);
        };

        let Some(zone) = self.zone_mut(current) else {
            return Ok(Some(Flow::Continue));
        };
        let outcome = zone.add_tower(&name, position, height).map(ZoneEvent::tower_added);
        self.report(outcome, |added| format!("{} in network '{}'", added, current))
    }

    fn register_user(&mut self, current: &ZoneId) -> Result<Option<Flow>> {
        let Some(name) = self.prompter.read_line("Enter user name: ")? else {
            return Ok(None);
        };
        if name.is_empty() {
            self.prompter.say("User name cannot be empty.")?;
            return Ok(Some(Flow::Continue));
        }
        let Some(phone) = self.prompter.read_line("Enter user phone number: ")? else {
            return Ok(None);
        };
        if !is_plausible_phone(&phone) {
            self.prompter.say("Invalid phone number. Must be digits only and at least 7 digits long.")?;
            return Ok(Some(Flow::Continue));
        }
        let Some(position) = self.prompter.read_position("Enter user initial position (x,y): ")? else {
            return Ok(None);
        };

        let Some(zone) = self.zone_mut(current) else {
            return Ok(Some(Flow::Continue));
        };
        let outcome = zone.register_user(&name, &phone, position);
        self.report(outcome, |report| render_events(&report.events))
    }

    fn move_user(&mut self, current: &ZoneId) -> Result<Option<Flow>> {
        let Some(phone) = self.prompter.read_line("Enter user phone number to move: ")? else {
            return Ok(None);
        };
        let Some(position) = self.prompter.read_position("Enter new user position (x,y): ")? else {
            return Ok(None);
        };

        let Some(zone) = self.zone_mut(current) else {
            return Ok(Some(Flow::Continue));
        };
        let outcome = zone.move_user(&phone, position);
        self.report(outcome, |report| render_events(&report.events))
    }

    fn make_call(&mut self, current: &ZoneId) -> Result<Option<Flow>> {
        let Some(caller) = self.prompter.read_line("Enter caller's phone number: ")? else {
            return Ok(None);
        };
        let Some(receiver) = self.prompter.read_line("Enter receiver's phone number: ")? else {
            return Ok(None);
        };

        let Some(zone) = self.zone_mut(current) else {
            return Ok(Some(Flow::Continue));
        };
        let outcome = zone.make_call(&caller, &receiver);
        self.report(outcome, |route| render_events(&[route.to_event()]))
    }

    fn end_call(&mut self, current: &ZoneId) -> Result<Option<Flow>> {
        let Some(phone) = self.prompter.read_line("Enter phone number of user to end call for: ")? else {
            return Ok(None);
        };

        let Some(zone) = self.zone_mut(current) else {
            return Ok(Some(Flow::Continue));
        };
        let outcome = zone.end_call(&phone);
        self.report(outcome, |ended| render_events(&[ended.to_event()]))
    }

    fn switch_network(&mut self) -> Result<Option<Flow>> {
        let Some(name) = self.prompter.read_line("Enter network name to switch to: ")? else {
            return Ok(None);
        };

        match self.directory.get_network(&name) {
            Some(zone) => {
                let id = zone.get_id().clone();
                self.prompter.say(&format!("Switched to network: {}", id))?;
                self.current = Some(id);
            }
            None => self.prompter.say(&format!("Network '{}' not found.", name))?,
        }
        Ok(Some(Flow::Continue))
    }

    fn display_current(&mut self, current: &ZoneId) -> Result<Option<Flow>> {
        if let Some(zone) = self.directory.get_network(current.as_str()) {
            let text = render_zone(&zone.describe());
            self.prompter.say(&text)?;
        }
        Ok(Some(Flow::Continue))
    }
}

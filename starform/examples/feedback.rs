//! Feedback card walkthrough.
//!
//! Mounts the canonical rating card, submits once with nothing selected to
//! show the validation surface, then picks a rating and settles the widget.

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use starform::prelude::*;
use webdom::html::to_html;

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("feedback.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut widget = RatingWidget::mount(rating_card()).expect("canonical card mounts");

    // Submit before selecting anything: rejected, message announced.
    widget.handle_event(&Event::Submit {
        target: widget.form_id().to_string(),
    });
    println!("validity: {:?}", widget.validity());
    if let Some(msg) = widget.error_message() {
        println!("alert:    {msg}");
    }

    // The shake animation finishing clears the invalid marker.
    widget.handle_event(&Event::AnimationEnd {
        target: widget.container_id().to_string(),
    });

    // Pick the fourth option and resubmit.
    let choice = widget.radio_ids()[3].clone();
    widget.handle_event(&Event::Change { target: choice });
    widget.handle_event(&Event::Submit {
        target: widget.form_id().to_string(),
    });

    println!("validity: {:?}", widget.validity());
    println!("selected: {:?}", widget.selected_value());
    println!("{}", to_html(widget.root()));

    Ok(())
}

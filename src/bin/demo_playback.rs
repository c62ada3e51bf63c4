// Quick demonstration of the record/playback loop
// Run with: cargo run --bin demo_playback

use padseq::{Notification, PadSequencer, create_notification_channel};
use ringbuf::traits::{Consumer, Producer};

fn main() {
    println!("padseq - record/playback demo");
    println!("=============================");

    let (mut tx, mut rx) = create_notification_channel(256);
    let mut seq = PadSequencer::new(10.0);

    // Record two pads against the shared timeline
    push_all(&mut tx, seq.record(0.0));
    seq.touch_down("a1".parse().unwrap(), 0.0);
    seq.touch_down("a2".parse().unwrap(), 0.25);
    seq.touch_up("a1".parse().unwrap(), 0.5);
    seq.touch_up("a2".parse().unwrap(), 0.75);
    push_all(&mut tx, seq.stop(1.0));

    println!("recorded {} events:", seq.events().len());
    for event in seq.events() {
        println!(
            "  pad {}  time {:.2}s  duration {:.2}s",
            event.pad, event.time, event.duration
        );
    }

    // Replay from the top, ticking like a 100 fps host
    push_all(&mut tx, seq.rewind(1.0));
    push_all(&mut tx, seq.play(1.0));
    for frame in 1..=100 {
        push_all(&mut tx, seq.tick(1.0 + frame as f64 * 0.01));
    }
    push_all(&mut tx, seq.stop(2.0));

    println!("\nnotifications:");
    while let Some(notification) = rx.try_pop() {
        match notification {
            Notification::PadDown { pad, time } => println!("  {:>6.2}s  {} down", time, pad),
            Notification::PadUp { pad, time } => println!("  {:>6.2}s  {} up", time, pad),
            Notification::PlayStarted { time } => println!("  {:>6.2}s  play", time),
            Notification::RecordStarted { time } => println!("  {:>6.2}s  record", time),
            Notification::Stopped { time } => println!("  {:>6.2}s  stop", time),
            Notification::TimeUpdate { .. } => {}
        }
    }
}

fn push_all(tx: &mut padseq::messaging::NotificationProducer, notifications: Vec<Notification>) {
    for notification in notifications {
        if tx.try_push(notification).is_err() {
            eprintln!("warning: notification buffer full, event dropped");
        }
    }
}

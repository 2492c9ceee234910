use std::sync::{Arc, mpsc::channel};

use lvlog::{Severity, Target, logger_config};

fn main() {
    let path = std::env::temp_dir().join("lvlog_demo.log");
    let logger = Arc::new(
        logger_config()
            .with_target(Target::FileAndTerminal)
            .with_level(Severity::Info)
            .with_log_file(&path)
            .build()
            .expect("Unable to open log file"),
    );
    logger.info("Hello, world!");
    logger.debug("not written: below the threshold");

    let (handles, senders): (Vec<_>, Vec<_>) = (0..5)
        .map(|i| {
            let (sender, receiver) = channel::<&'static str>();
            let logger = Arc::clone(&logger);
            let handle = std::thread::spawn(move || {
                for message in receiver {
                    logger.warning(&format!("thread {i} received: {message}"));
                }
            });
            (handle, sender)
        })
        .unzip();
    for sender in senders {
        sender.send("Hello, world!").unwrap();
    }
    for handle in handles {
        handle.join().unwrap();
    }
    logger.error("shutting down");
    drop(logger);

    let content = std::fs::read_to_string(&path).unwrap();
    println!("last lines of {}:", path.display());
    for line in content.trim_end().lines().rev().take(3).collect::<Vec<_>>().into_iter().rev() {
        println!("\t{line}");
    }
}

use std::sync::mpsc::{Receiver, channel};

/// Watch the worldgen config and signal the tick loop over a channel; the
/// watcher thread never touches world state.
pub fn spawn_worldgen_watcher(path: String) -> Receiver<()> {
    let (tx, rx) = channel::<()>();
    std::thread::spawn(move || {
        use notify::{EventKind, RecursiveMode, Watcher};
        if let Ok(mut watcher) =
            notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
                if let Ok(event) = res {
                    match event.kind {
                        EventKind::Modify(_)
                        | EventKind::Create(_)
                        | EventKind::Remove(_)
                        | EventKind::Any => {
                            let _ = tx.send(());
                        }
                        _ => {}
                    }
                }
            })
        {
            let _ = watcher.watch(std::path::Path::new(&path), RecursiveMode::NonRecursive);
            loop {
                std::thread::sleep(std::time::Duration::from_secs(3600));
            }
        }
    });
    rx
}

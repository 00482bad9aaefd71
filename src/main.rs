fn main() {
    if let Err(e) = frame_triage::cli::process_cli() {
        eprintln!("frame-triage: error: {e:#}");
        std::process::exit(1);
    }
}

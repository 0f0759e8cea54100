fn main() {
    if let Err(e) = bmc_drv::main() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

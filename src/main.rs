fn main() -> std::process::ExitCode {
    acrylic_window_lib::run()
}

fn main() {
    let return_code = caption_stack::run_app();
    std::process::exit(return_code)
}

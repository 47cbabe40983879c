fn main() {
    hrms_lite_frontend::start();
}

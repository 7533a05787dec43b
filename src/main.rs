fn main() {
    lostpaw_web::start();
}

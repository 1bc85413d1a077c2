//! Prints an Argon2 PHC string suitable for `ADMIN_PASSWORD_HASH`.

use depot_admin_api::auth::hash_password;

fn main() {
    let Some(password) = std::env::args().nth(1) else {
        eprintln!("usage: hash-admin-password <password>");
        std::process::exit(2);
    };

    match hash_password(&password) {
        Ok(hash) => println!("{hash}"),
        Err(error) => {
            eprintln!("failed to hash password: {error}");
            std::process::exit(1);
        }
    }
}

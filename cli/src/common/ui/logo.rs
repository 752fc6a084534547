//! Startup banner.

pub const LOGO: &str = r"
       ==============================
             Cybersecurity Bot
        ==============================
          ___          _ _
         | _ \__ _ _ _| | | ___
         |  _/ _` | '_| | |/ _ \
         |_| \__,_|_| |_|_|\___/
        ==============================";

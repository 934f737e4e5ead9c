use std::env;
use std::process;

use diatonic::Scale;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: diatonic \"<TONIC> <QUALITY>\"");
        eprintln!("       diatonic --yaml \"<TONIC> <QUALITY>\"");
        process::exit(1);
    }

    let mut yaml = false;
    let mut scale_name = &args[1];

    // Parse flags
    if args[1] == "--yaml" {
        yaml = true;
        if args.len() < 3 {
            eprintln!("Usage: diatonic --yaml \"<TONIC> <QUALITY>\"");
            process::exit(1);
        }
        scale_name = &args[2];
    }

    let scale = match Scale::new(scale_name) {
        Ok(scale) => scale,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if yaml {
        match serde_yaml::to_string(&scale) {
            Ok(report) => print!("{}", report),
            Err(e) => {
                eprintln!("Error serializing scale: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("{}: {}", scale, scale.ascend().join(" "));

        let altered = scale.key_signature().notes();
        if altered.is_empty() {
            println!("Key signature: no sharps or flats");
        } else {
            let names: Vec<String> = altered.iter().map(|note| note.to_string()).collect();
            println!("Key signature: {}", names.join(" "));
        }
    }
}

use anyhow::Context;
use palette_core::{
    Color, ContrastRating, Gradient, GradientRecord, Library, PaletteKind, PaletteRecord,
    VisionDeficiency, contrast_ratio, default_library, hex_to_rgb, rgb_to_hsl,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::env;
use std::io::{self, Write};

fn print_help() {
    println!(
        r##"Palette Studio CLI

Commands:
  new <library_name>
  save-default <library.json>
  load <library.json>
  list <library.json>
  contrast <hex> <hex>
  shades <hex> [count]
  tints <hex> [count]
  harmony <complementary|analogous|triadic> <hex>
  simulate <protanopia|deuteranopia|tritanopia|achromatopsia> <hex>
  generate <keyword> [theme|complementary|analogous|triadic|monochromatic|random]
  repl <library.json>

Examples:
  cargo run -p palette_cli -- save-default library.json
  cargo run -p palette_cli -- contrast "#6366F1" "#FFFFFF"
  cargo run -p palette_cli -- generate ocean theme
  cargo run -p palette_cli -- repl library.json"##
    );
}

fn print_colors(colors: &[Color]) {
    for c in colors {
        let hsl = rgb_to_hsl(c.rgb);
        println!(
            "  {} | rgb({},{},{}) | hsl({},{}%,{}%)",
            c.hex, c.rgb.r, c.rgb.g, c.rgb.b, hsl.h, hsl.s, hsl.l
        );
    }
}

fn print_contrast(a: &str, b: &str) -> anyhow::Result<()> {
    let fg = hex_to_rgb(a).with_context(|| format!("'{a}' is not a hex color"))?;
    let bg = hex_to_rgb(b).with_context(|| format!("'{b}' is not a hex color"))?;
    let ratio = contrast_ratio(fg, bg);
    println!(
        "Contrast {:.2}:1 | WCAG {}",
        ratio,
        ContrastRating::from_ratio(ratio)
    );
    Ok(())
}

fn print_harmony(kind: &str, hex: &str) -> anyhow::Result<()> {
    match kind {
        "complementary" => {
            let c = palette_core::harmony::complementary(hex)
                .with_context(|| format!("'{hex}' is not a hex color"))?;
            println!("Complementary:");
            print_colors(&[c]);
        }
        "analogous" => {
            let set = palette_core::harmony::analogous(hex)
                .with_context(|| format!("'{hex}' is not a hex color"))?;
            println!("Analogous:");
            print_colors(&set);
        }
        "triadic" => {
            let set = palette_core::harmony::triadic(hex)
                .with_context(|| format!("'{hex}' is not a hex color"))?;
            println!("Triadic:");
            print_colors(&set);
        }
        _ => println!("Usage: harmony <complementary|analogous|triadic> <hex>"),
    }
    Ok(())
}

fn list_library(library: &Library) {
    println!("Library: {}", library.name);
    if library.palettes.is_empty() {
        println!("(no palettes)");
    } else {
        println!("Palettes:");
        for (name, record) in &library.palettes {
            let hexes = record
                .colors
                .iter()
                .map(|c| c.hex.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            let vis = if record.public { "public" } else { "private" };
            println!("  {name} | {vis} | {hexes}");
        }
    }
    if library.gradients.is_empty() {
        println!("(no gradients)");
    } else {
        println!("Gradients:");
        for (name, record) in &library.gradients {
            println!("  {name} | {}", record.css);
        }
    }
}

fn repl(library_path: &str) -> anyhow::Result<()> {
    let mut library = Library::load_json_file(library_path)?;
    let mut rng = SmallRng::from_entropy();

    // working state: the last generated palette and the gradient
    // being edited, either can be recorded into the library by name
    let mut buffer: Vec<Color> = Vec::new();
    let mut gradient = Gradient::new();

    println!("Loaded library: {}", library.name);
    println!("Type 'help' for commands. 'quit' to exit.");

    loop {
        print!("ps> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            // EOF (Ctrl+D)
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "help" => {
                println!(
                    r#"Commands:
  generate <keyword> [type]     (fills the working palette)
  buffer                        (show the working palette)
  contrast <hex> <hex>
  shades <hex> [count]
  tints <hex> [count]
  harmony <kind> <hex>
  simulate <kind> <hex>
  record palette <name>         (store the working palette)
  palettes
  delete palette <name>
  gradient new|random|css
  gradient kind <linear|radial|conic>
  gradient angle <0..359>
  gradient add-stop
  gradient remove-stop <index>
  record gradient <name>
  gradients
  delete gradient <name>
  list
  save
  quit"#
                );
            }
            "quit" | "exit" => break,

            "generate" => {
                if parts.len() < 2 || parts.len() > 3 {
                    println!("Usage: generate <keyword> [type]");
                    continue;
                }
                let kind = match parts.get(2) {
                    Some(s) => PaletteKind::parse(&s.to_lowercase()),
                    None => PaletteKind::Theme,
                };
                buffer = palette_core::keyword_palette(parts[1], kind, &mut rng);
                println!("Generated {} palette for '{}':", kind.label(), parts[1]);
                print_colors(&buffer);
            }

            "buffer" | "show" => {
                if buffer.is_empty() {
                    println!("(working palette is empty, use: generate <keyword>)");
                    continue;
                }
                print_colors(&buffer);
            }

            "contrast" => {
                if parts.len() != 3 {
                    println!("Usage: contrast <hex> <hex>");
                    continue;
                }
                if let Err(e) = print_contrast(parts[1], parts[2]) {
                    println!("{e}");
                }
            }

            "shades" | "tints" => {
                if parts.len() < 2 || parts.len() > 3 {
                    println!("Usage: {cmd} <hex> [count]");
                    continue;
                }
                let count: usize = match parts.get(2) {
                    Some(n) => match n.parse() {
                        Ok(count) => count,
                        Err(_) => {
                            println!("Usage: {cmd} <hex> [count]");
                            continue;
                        }
                    },
                    None => 5,
                };
                let out = if cmd == "shades" {
                    palette_core::harmony::shades(parts[1], count)
                } else {
                    palette_core::harmony::tints(parts[1], count)
                };
                if out.is_empty() {
                    println!("'{}' is not a hex color", parts[1]);
                    continue;
                }
                print_colors(&out);
            }

            "harmony" => {
                if parts.len() != 3 {
                    println!("Usage: harmony <complementary|analogous|triadic> <hex>");
                    continue;
                }
                if let Err(e) = print_harmony(&parts[1].to_lowercase(), parts[2]) {
                    println!("{e}");
                }
            }

            "simulate" => {
                if parts.len() != 3 {
                    println!("Usage: simulate <kind> <hex>");
                    continue;
                }
                let Some(kind) = VisionDeficiency::parse(&parts[1].to_lowercase()) else {
                    println!("Unknown simulation kind '{}'", parts[1]);
                    continue;
                };
                match palette_core::simulate(parts[2], kind) {
                    Some(hex) => println!("{} under {} -> {hex}", parts[2], kind.label()),
                    None => println!("'{}' is not a hex color", parts[2]),
                }
            }

            "record" => {
                if parts.len() != 3 {
                    println!("Usage: record palette <name>  OR  record gradient <name>");
                    continue;
                }
                let name = parts[2].to_string();
                match parts[1].to_lowercase().as_str() {
                    "palette" => {
                        if buffer.is_empty() {
                            println!("Working palette is empty. Use: generate <keyword>");
                            continue;
                        }
                        if let Err(e) =
                            library.add_palette(&name, PaletteRecord::new(buffer.clone()))
                        {
                            println!("{e}");
                            continue;
                        }
                        library.save_json_file(library_path)?;
                        println!("Recorded palette '{name}' and saved.");
                    }
                    "gradient" => {
                        if let Err(e) =
                            library.add_gradient(&name, GradientRecord::new(gradient.clone()))
                        {
                            println!("{e}");
                            continue;
                        }
                        library.save_json_file(library_path)?;
                        println!("Recorded gradient '{name}' and saved.");
                    }
                    _ => println!("Usage: record palette <name>  OR  record gradient <name>"),
                }
            }

            "palettes" => {
                if library.palettes.is_empty() {
                    println!("(no palettes yet)");
                    continue;
                }
                for (name, record) in &library.palettes {
                    let hexes = record
                        .colors
                        .iter()
                        .map(|c| c.hex.as_str())
                        .collect::<Vec<_>>()
                        .join(" ");
                    println!("  {name} | {hexes}");
                }
            }

            "gradients" => {
                if library.gradients.is_empty() {
                    println!("(no gradients yet)");
                    continue;
                }
                for (name, record) in &library.gradients {
                    println!("  {name} | {}", record.css);
                }
            }

            "delete" => {
                if parts.len() != 3 {
                    println!("Usage: delete palette <name>  OR  delete gradient <name>");
                    continue;
                }
                let name = parts[2];
                let removed = match parts[1].to_lowercase().as_str() {
                    "palette" => library.palettes.remove(name).is_some(),
                    "gradient" => library.gradients.remove(name).is_some(),
                    _ => {
                        println!("Usage: delete palette <name>  OR  delete gradient <name>");
                        continue;
                    }
                };
                if !removed {
                    println!("Unknown {} '{name}'", parts[1].to_lowercase());
                    continue;
                }
                library.save_json_file(library_path)?;
                println!("Deleted {} '{name}' and saved.", parts[1].to_lowercase());
            }

            "gradient" => {
                if parts.len() < 2 {
                    println!("Usage: gradient new|random|css|kind|angle|add-stop|remove-stop");
                    continue;
                }
                match parts[1].to_lowercase().as_str() {
                    "new" => {
                        gradient = Gradient::new();
                        println!("{}", gradient.css());
                    }
                    "random" => {
                        gradient = Gradient::random(&mut rng);
                        println!("{}", gradient.css());
                    }
                    "css" => println!("{}", gradient.css()),
                    "kind" => {
                        let Some(kind) = parts
                            .get(2)
                            .and_then(|s| palette_core::GradientKind::parse(&s.to_lowercase()))
                        else {
                            println!("Usage: gradient kind <linear|radial|conic>");
                            continue;
                        };
                        gradient.kind = kind;
                        println!("{}", gradient.css());
                    }
                    "angle" => {
                        let Some(angle) = parts.get(2).and_then(|s| s.parse::<u16>().ok()) else {
                            println!("Usage: gradient angle <0..359>");
                            continue;
                        };
                        gradient.angle = angle % 360;
                        println!("{}", gradient.css());
                    }
                    "add-stop" => match gradient.add_stop(&mut rng) {
                        Ok(()) => println!("{}", gradient.css()),
                        Err(e) => println!("{e}"),
                    },
                    "remove-stop" => {
                        let Some(index) = parts.get(2).and_then(|s| s.parse::<usize>().ok())
                        else {
                            println!("Usage: gradient remove-stop <index>");
                            continue;
                        };
                        match gradient.remove_stop(index) {
                            Ok(()) => println!("{}", gradient.css()),
                            Err(e) => println!("{e}"),
                        }
                    }
                    _ => println!("Usage: gradient new|random|css|kind|angle|add-stop|remove-stop"),
                }
            }

            "list" => list_library(&library),

            "save" => {
                library.save_json_file(library_path)?;
                println!("Saved library: {library_path}");
            }

            _ => println!("Unknown command. Type 'help'."),
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_help();
        return Ok(());
    }

    match args[1].as_str() {
        "new" => {
            let name = args.get(2).context("missing <library_name>")?;
            let library = Library::new(name);
            println!("Created library in memory: {}", library.name);
            println!("Tip: run `save-default <file.json>` to write a starter file.");
        }
        "save-default" => {
            let path = args.get(2).context("missing <library.json>")?;
            let library = default_library();
            library.save_json_file(path)?;
            println!("Saved default library to: {path}");
        }
        "load" => {
            let path = args.get(2).context("missing <library.json>")?;
            let library = Library::load_json_file(path)?;
            println!("Loaded library: {}", library.name);
            println!(
                "Palettes: {}, gradients: {}",
                library.palettes.len(),
                library.gradients.len()
            );
        }
        "list" => {
            let path = args.get(2).context("missing <library.json>")?;
            let library = Library::load_json_file(path)?;
            list_library(&library);
        }
        "contrast" => {
            let a = args.get(2).context("missing foreground <hex>")?;
            let b = args.get(3).context("missing background <hex>")?;
            print_contrast(a, b)?;
        }
        "shades" | "tints" => {
            let hex = args.get(2).context("missing <hex>")?;
            let count: usize = match args.get(3) {
                Some(n) => n.parse().context("count must be a number")?,
                None => 5,
            };
            let out = if args[1] == "shades" {
                palette_core::harmony::shades(hex, count)
            } else {
                palette_core::harmony::tints(hex, count)
            };
            anyhow::ensure!(!out.is_empty(), "'{hex}' is not a hex color");
            print_colors(&out);
        }
        "harmony" => {
            let kind = args.get(2).context("missing harmony kind")?;
            let hex = args.get(3).context("missing <hex>")?;
            print_harmony(&kind.to_lowercase(), hex)?;
        }
        "simulate" => {
            let kind = args.get(2).context("missing simulation kind")?;
            let hex = args.get(3).context("missing <hex>")?;
            let kind = VisionDeficiency::parse(&kind.to_lowercase())
                .with_context(|| format!("unknown simulation kind '{kind}'"))?;
            let simulated = palette_core::simulate(hex, kind)
                .with_context(|| format!("'{hex}' is not a hex color"))?;
            println!("{hex} under {} -> {simulated}", kind.label());
        }
        "generate" => {
            let keyword = args.get(2).context("missing <keyword>")?;
            let kind = match args.get(3) {
                Some(s) => PaletteKind::parse(&s.to_lowercase()),
                None => PaletteKind::Theme,
            };
            let mut rng = SmallRng::from_entropy();
            let colors = palette_core::keyword_palette(keyword, kind, &mut rng);
            println!("{} palette for '{keyword}':", kind.label());
            print_colors(&colors);
        }
        "repl" => {
            let path = args.get(2).context("missing <library.json>")?;
            repl(path)?;
        }

        _ => print_help(),
    }

    Ok(())
}

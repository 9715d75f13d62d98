fn main() {

    // 1. Parse commandline arguments and load the config into a build target
    let target = match qcmesh::build_target(qcmesh::args::parse_cli_args()) {
        Ok(target) => target,
        Err(err) => {
            println!("CLI ERROR!");
            match err {
                qcmesh::QcmeshError::ArgError(err) => {
                    println!("{}", err);
                },
                qcmesh::QcmeshError::StringOnly(err) => {
                    println!("{}", err);
                },
                _ => {
                    println!("UNHANDLED CLI ERROR");
                    println!("{}", err);
                },
            }
            std::process::exit(1);
        },
    };

    // 2. Run the build process on the target
    if let Err(err) = qcmesh::run_process(target) {
        println!("PROCESS ERROR!");
        match err {
            qcmesh::QcmeshError::BuildError(err) => {
                println!("{}", err);
            },
            qcmesh::QcmeshError::EngineError(err) => {
                println!("{}", err);
            },
            qcmesh::QcmeshError::CorrectorError(err) => {
                println!("{}", err);
            },
            _ => {
                println!("UNHANDLED PROCESS ERROR");
                println!("{}", err);
            },
        }
        std::process::exit(1);
    };
}

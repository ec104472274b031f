use super::*;
use crate::algebra::*;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::{BufReader, Write};
use std::path::PathBuf;
use std::{fs::File, io, io::Read};

/// Reading and writing of solver problems, including
/// settings, as JSON files
pub trait SolverJSONReadWrite: Sized {
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error>;
    fn read_from_file(file: &mut File) -> Result<Self, io::Error>;
}

// The problem as provided by the user, together with
// the settings it should be solved with

#[derive(Serialize, Deserialize)]
#[serde(bound = "T: Serialize + DeserializeOwned")]
struct JsonProblemData<T: FloatT> {
    pub P: Matrix<T>,
    pub c: Vec<T>,
    pub G: Matrix<T>,
    pub h: Vec<T>,
    #[serde(default)]
    pub settings: DefaultSettings<T>,
}

impl<T> SolverJSONReadWrite for DefaultSolver<T>
where
    T: FloatT + DeserializeOwned + Serialize,
{
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json_data = JsonProblemData {
            P: self.data.P.clone(),
            c: self.data.c.clone(),
            G: self.data.G.clone(),
            h: self.data.h.clone(),
            settings: self.settings.clone(),
        };

        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let json_data: JsonProblemData<T> = serde_json::from_str(&buffer)?;

        let JsonProblemData {
            P,
            c,
            G,
            h,
            settings,
        } = json_data;

        Self::new(&P, &G, &c, &h, settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// A [`ProblemSource`] reading a problem from a JSON file on disk.
///
/// Accepts files written by [`SolverJSONReadWrite::write_to_file`]; any
/// settings stored in the file are ignored.
#[derive(Debug, Clone)]
pub struct JsonProblemFile {
    path: PathBuf,
}

impl JsonProblemFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl<T> ProblemSource<T> for JsonProblemFile
where
    T: FloatT + DeserializeOwned + Serialize,
{
    fn problem(&self) -> Result<QPProblem<T>, SourceError> {
        let reader = BufReader::new(File::open(&self.path)?);
        let json_data: JsonProblemData<T> =
            serde_json::from_reader(reader).map_err(|e| SourceError::Parse(e.to_string()))?;

        Ok(QPProblem::new(
            json_data.P,
            json_data.G,
            json_data.c,
            json_data.h,
        ))
    }
}

#[test]
fn test_json_io() {
    use crate::solver::IPSolver;
    use std::io::{Seek, SeekFrom};

    let P = Matrix::from(&[[2.]]);
    let G = Matrix::from(&[[-1.]]);
    let c = [1.0];
    let h = [-2.0];

    let settings = crate::solver::DefaultSettingsBuilder::default()
        .verbose(false)
        .max_iter(50)
        .build()
        .unwrap();

    let mut solver = DefaultSolver::<f64>::new(&P, &G, &c, &h, settings).unwrap();
    solver.solve().unwrap();

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    solver.write_to_file(&mut file).unwrap();

    // read the problem from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut solver2 = DefaultSolver::<f64>::read_from_file(&mut file).unwrap();
    assert_eq!(solver2.settings, solver.settings);

    solver2.solve().unwrap();
    assert_eq!(solver.solution.x, solver2.solution.x);
}

#[test]
fn test_json_malformed() {
    use std::io::{Seek, SeekFrom};

    let mut file = tempfile::tempfile().unwrap();
    file.write_all(b"{\"P\": 1}").unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let err = DefaultSolver::<f64>::read_from_file(&mut file).err().unwrap();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

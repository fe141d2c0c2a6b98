/// Tag a test case with its location.
macro_rules! ex {
    ( $( $tt: expr ),* $( , )? ) => {
        (file!(), line!() $( , $tt )*)
    };
}

pub(crate) use ex;

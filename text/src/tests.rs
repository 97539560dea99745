mod lossless;
mod sample;

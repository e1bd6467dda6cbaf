// End-to-end codec behaviour over real files and in-memory streams:
// chunk boundaries, precondition order, tag gating on both sides,
// partial-output cleanup, and round-trip identity.

#[cfg(test)]
mod tests {
    use std::fs::{self, File};
    use std::io::{self, Cursor, Write};
    use std::path::{Path, PathBuf};

    use proptest::prelude::*;
    use tempfile::{tempdir, TempDir};
    use uz2_core::compression::{Compressor, DeflateCompressor};
    use uz2_core::constants::{FORMAT_TAG, UNCOMPRESSED_CHUNK_SIZE, UPSTREAM_TAG};
    use uz2_core::hashing::{digest_bytes, DigestAlg};
    use uz2_core::paths::SymmetricPathPolicy;
    use uz2_core::prelude::*;
    use uz2_core::stream::framing::{encode_record, ChunkHeader, RecordReader};
    use uz2_core::stream::io::write_staged;
    use uz2_core::stream::{ChunkEncoder, TagGate};

    /// Tagged package body: mixes compressible runs with noise.
    fn package_bytes(len: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(len);
        out.extend_from_slice(&FORMAT_TAG[..len.min(4)]);
        let mut x: u32 = 0x1234_5678;
        while out.len() < len {
            x = x.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let b = if (out.len() / 512) % 2 == 0 { b'A' } else { (x >> 24) as u8 };
            out.push(b);
        }
        out
    }

    fn write_file(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, data).expect("write fixture");
        path
    }

    fn chunk_sizes(uz2: &Path) -> Vec<u32> {
        RecordReader::new(File::open(uz2).unwrap())
            .map(|r| r.expect("well-formed record").header.uncompressed_len)
            .collect()
    }

    /// A valid UZ2 stream around arbitrary content, bypassing the compress-side tag check.
    fn raw_uz2(content: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        for chunk in content.chunks(UNCOMPRESSED_CHUNK_SIZE) {
            let mut payload = Vec::new();
            DeflateCompressor::default().compress_chunk(chunk, &mut payload).unwrap();
            let header = ChunkHeader::new(payload.len(), chunk.len()).unwrap();
            out.extend_from_slice(&encode_record(&header, &payload).unwrap());
        }
        out
    }

// # ✅ 1. The 70000-byte scenario

    #[test]
    fn seventy_thousand_bytes_round_trip() {
        let tmp = tempdir().unwrap();
        let original = package_bytes(70_000);
        let input = write_file(&tmp, "KF-Example.rom", &original);

        let packed = compress(&input, None).expect("compress ok");
        let uz2 = tmp.path().join("KF-Example.rom.uz2");
        assert_eq!(packed.output.as_deref(), Some(uz2.as_path()));
        assert_eq!(packed.chunks, 3);
        assert_eq!(packed.bytes_in, 70_000);
        assert_eq!(packed.bytes_out, fs::metadata(&uz2).unwrap().len());
        assert_eq!(chunk_sizes(&uz2), vec![32_768, 32_768, 4_464]);

        let out_dir = tmp.path().join("restored");
        let unpacked = decompress(&uz2, Some(out_dir.as_path())).expect("decompress ok");
        let restored = out_dir.join("KF-Example");
        assert_eq!(unpacked.output.as_deref(), Some(restored.as_path()));
        assert_eq!(fs::read(&restored).unwrap(), original);

        assert_eq!(packed.input_digest, unpacked.output_digest);
        assert_eq!(packed.output_digest, unpacked.input_digest);
        assert_eq!(packed.input_digest, digest_bytes(DigestAlg::Sha1, &original));
    }

    #[test]
    fn decompress_without_dir_restores_original_name() {
        let tmp = tempdir().unwrap();
        let original = package_bytes(5_000);
        let input = write_file(&tmp, "Sounds.uax", &original);

        compress(&input, None).unwrap();
        fs::remove_file(&input).unwrap();

        decompress(&tmp.path().join("Sounds.uax.uz2"), None).unwrap();
        assert_eq!(fs::read(&input).unwrap(), original);
    }

    #[test]
    fn symmetric_policy_round_trips_through_a_directory() {
        let tmp = tempdir().unwrap();
        let original = package_bytes(100);
        let input = write_file(&tmp, "Weapons.u", &original);
        let codec = Uz2Codec::with_policy(CodecConfig::default(), SymmetricPathPolicy);

        let dir = tmp.path().join("redirect");
        let packed = codec.compress(&input, Some(dir.as_path())).unwrap();
        let back = tmp.path().join("back");
        let unpacked = codec.decompress(packed.output.as_deref().unwrap(), Some(back.as_path())).unwrap();

        assert_eq!(unpacked.output, Some(back.join("Weapons.u")));
        assert_eq!(fs::read(back.join("Weapons.u")).unwrap(), original);
    }

// # ✅ 2. Chunk boundaries

    #[test]
    fn exact_multiples_produce_full_chunks_only() {
        for k in 1..=3usize {
            let (uz2, report) = {
                let mut sink = Vec::new();
                let report = compress_stream(Cursor::new(package_bytes(UNCOMPRESSED_CHUNK_SIZE * k)), &mut sink, &CodecConfig::default()).unwrap();
                (sink, report)
            };
            let sizes: Vec<u32> = RecordReader::new(Cursor::new(uz2))
                .map(|r| r.unwrap().header.uncompressed_len)
                .collect();
            assert_eq!(sizes, vec![32_768; k]);
            assert_eq!(report.chunks, k as u64);
        }
    }

    #[test]
    fn remainder_becomes_short_last_chunk() {
        let mut sink = Vec::new();
        compress_stream(Cursor::new(package_bytes(UNCOMPRESSED_CHUNK_SIZE + 1)), &mut sink, &CodecConfig::default()).unwrap();

        let sizes: Vec<u32> = RecordReader::new(Cursor::new(sink)).map(|r| r.unwrap().header.uncompressed_len).collect();
        assert_eq!(sizes, vec![32_768, 1]);
    }

    #[test]
    fn tag_only_input_is_one_chunk() {
        let mut sink = Vec::new();
        let report = compress_stream(&FORMAT_TAG[..], &mut sink, &CodecConfig::default()).unwrap();
        assert_eq!(report.chunks, 1);
        assert_eq!(report.bytes_in, 4);
    }

// # ✅ 3. Compress preconditions

    #[test]
    fn missing_input_is_input_not_found() {
        let tmp = tempdir().unwrap();
        let err = compress(&tmp.path().join("nope.u"), None).unwrap_err();
        assert_eq!(err.kind(), FailureKind::InputNotFound);

        let err = decompress(&tmp.path().join("nope.u.uz2"), None).unwrap_err();
        assert_eq!(err.kind(), FailureKind::InputNotFound);
    }

    #[test]
    fn input_not_found_wins_over_extension_checks() {
        let tmp = tempdir().unwrap();
        let err = compress(&tmp.path().join("gone.uz2"), None).unwrap_err();
        assert_eq!(err.kind(), FailureKind::InputNotFound);
    }

    #[test]
    fn directory_input_is_input_not_found() {
        let tmp = tempdir().unwrap();
        let err = compress(tmp.path(), None).unwrap_err();
        assert_eq!(err.kind(), FailureKind::InputNotFound);
    }

    #[test]
    fn container_input_is_already_compressed() {
        let tmp = tempdir().unwrap();
        let input = write_file(&tmp, "Map.rom.uz2", &package_bytes(64));

        let err = compress(&input, None).unwrap_err();
        assert_eq!(err.kind(), FailureKind::AlreadyCompressed);
        assert!(!tmp.path().join("Map.rom.uz2.uz2").exists());
    }

    #[test]
    fn wrong_tag_writes_nothing() {
        let tmp = tempdir().unwrap();
        let mut upstream = package_bytes(40_000);
        upstream[..4].copy_from_slice(&UPSTREAM_TAG);
        let input = write_file(&tmp, "Upstream.u", &upstream);
        let out_dir = tmp.path().join("never");

        let err = compress(&input, Some(out_dir.as_path())).unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidFormatTag);
        assert!(err.partial().is_none());
        assert!(!out_dir.exists(), "destination dir is resolved only after the tag check");

        let err = compress(&input, None).unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidFormatTag);
        assert!(!tmp.path().join("Upstream.u.uz2").exists());
    }

    #[test]
    fn tag_later_in_file_does_not_count() {
        let tmp = tempdir().unwrap();
        let mut data = vec![0u8; 16];
        data[4..8].copy_from_slice(&FORMAT_TAG);
        let input = write_file(&tmp, "Late.u", &data);

        assert_eq!(compress(&input, None).unwrap_err().kind(), FailureKind::InvalidFormatTag);
    }

    #[test]
    fn empty_and_tiny_inputs_fail_tag_check() {
        let tmp = tempdir().unwrap();
        for (name, data) in [("Empty.u", &b""[..]), ("Tiny.u", &FORMAT_TAG[..3])] {
            let input = write_file(&tmp, name, data);
            let err = compress(&input, None).unwrap_err();
            assert_eq!(err.kind(), FailureKind::InvalidFormatTag, "{}", name);
            assert!(!tmp.path().join(format!("{}.uz2", name)).exists());
        }
    }

    #[test]
    fn stock_filter_runs_before_tag_check_when_enabled() {
        let tmp = tempdir().unwrap();
        let codec = Uz2Codec::new(CodecConfig::default().skipping_stock_packages(true));

        let stock = write_file(&tmp, "Core.u", b"not even tagged");
        assert_eq!(codec.compress(&stock, None).unwrap_err().kind(), FailureKind::StockPackage);

        let text = write_file(&tmp, "readme.txt", &package_bytes(10));
        assert_eq!(codec.compress(&text, None).unwrap_err().kind(), FailureKind::UnsupportedExtension);

        let custom = write_file(&tmp, "KF-Custom.rom", &package_bytes(10));
        assert!(codec.compress(&custom, None).is_ok());

        // off by default
        assert!(compress(&text, None).is_ok());
    }

    #[test]
    fn invalid_level_is_config_error() {
        let tmp = tempdir().unwrap();
        let input = write_file(&tmp, "a.u", &package_bytes(10));
        let codec = Uz2Codec::new(CodecConfig::default().with_level(12));

        assert_eq!(codec.compress(&input, None).unwrap_err().kind(), FailureKind::InvalidConfig);
    }

// # ✅ 4. Decompress gating and failure cleanup

    #[test]
    fn plain_file_is_not_compressed_file() {
        let tmp = tempdir().unwrap();
        let input = write_file(&tmp, "a.u", &package_bytes(10));
        assert_eq!(decompress(&input, None).unwrap_err().kind(), FailureKind::NotCompressedFile);

        let upper = write_file(&tmp, "a.u.UZ2", &raw_uz2(&package_bytes(10)));
        assert_eq!(decompress(&upper, None).unwrap_err().kind(), FailureKind::NotCompressedFile);
    }

    #[test]
    fn garbage_is_codec_failure_and_staging_file_is_removed() {
        let tmp = tempdir().unwrap();
        let input = write_file(&tmp, "Junk.u.uz2", b"this is not a uz2 stream at all");

        let err = decompress(&input, None).unwrap_err();
        assert_eq!(err.kind(), FailureKind::CodecFailure);

        let partial = err.partial().expect("staging file was opened");
        let staging = partial.path.as_deref().expect("staging path");
        assert_eq!(staging.parent(), Some(tmp.path()));
        assert_ne!(staging, tmp.path().join("Junk.u").as_path());
        assert!(partial.removed);
        assert!(!staging.exists());
        assert_eq!(partial.bytes_written, 0);
        assert!(!tmp.path().join("Junk.u").exists());
    }

    #[test]
    fn failed_decompress_keeps_existing_destination() {
        let tmp = tempdir().unwrap();
        let existing = write_file(&tmp, "Foo.u", b"package bytes already on disk");

        let mut cut = raw_uz2(&package_bytes(70_000));
        cut.truncate(cut.len() - 10);
        for (name, wire) in [
            ("Foo.u.uz2", b"garbage, not a container".to_vec()),
            ("Foo.u.uz2", cut),
            ("Foo.u.uz2", raw_uz2(&UPSTREAM_TAG)),
        ] {
            let input = write_file(&tmp, name, &wire);
            assert!(decompress(&input, None).is_err());
            assert_eq!(fs::read(&existing).unwrap(), b"package bytes already on disk");
        }

        // only the fixtures remain, no staging leftovers
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 2);
    }

    #[test]
    fn failed_staged_write_keeps_existing_destination() {
        let tmp = tempdir().unwrap();
        let existing = write_file(&tmp, "Foo.u.uz2", b"previous container");

        let err = write_staged(&existing, |writer| -> Result<(), Uz2Error> {
            writer.write_all(&[0xAB; 4096])?;
            Err(Uz2Error::io(io::Error::new(io::ErrorKind::WriteZero, "disk full"))
                .with_partial(PartialOutput::new(4096, 0)))
        })
        .unwrap_err();

        assert_eq!(err.kind(), FailureKind::Io);
        let partial = err.partial().unwrap();
        assert!(partial.removed);
        assert!(!partial.path.as_deref().unwrap().exists());
        assert_eq!(fs::read(&existing).unwrap(), b"previous container");
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn successful_compress_replaces_stale_container() {
        let tmp = tempdir().unwrap();
        let original = package_bytes(3_000);
        let input = write_file(&tmp, "Foo.u", &original);
        let stale = write_file(&tmp, "Foo.u.uz2", b"stale");

        compress(&input, None).unwrap();

        let mut back = Vec::new();
        decompress_stream(File::open(&stale).unwrap(), &mut back, &CodecConfig::default()).unwrap();
        assert_eq!(back, original);
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 2);
    }

    #[test]
    fn well_formed_stream_with_wrong_tag_is_invalid_format_tag() {
        let tmp = tempdir().unwrap();
        let mut content = package_bytes(50_000);
        content[..4].copy_from_slice(&UPSTREAM_TAG);
        let input = write_file(&tmp, "Upstream.u.uz2", &raw_uz2(&content));

        let err = decompress(&input, None).unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidFormatTag);
        match &err {
            Uz2Error::InvalidFormatTag { found, partial } => {
                assert_eq!(found, &UPSTREAM_TAG.to_vec());
                let partial = partial.as_ref().expect("partial accounting");
                assert_eq!(partial.bytes_written, 0, "gate holds back chunk 0");
                assert!(partial.removed);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!tmp.path().join("Upstream.u").exists());
    }

    #[test]
    fn empty_container_is_invalid_format_tag() {
        let tmp = tempdir().unwrap();
        let input = write_file(&tmp, "Empty.u.uz2", b"");

        assert_eq!(decompress(&input, None).unwrap_err().kind(), FailureKind::InvalidFormatTag);
        assert!(!tmp.path().join("Empty.u").exists());
    }

    #[test]
    fn truncated_container_reports_what_was_written() {
        let tmp = tempdir().unwrap();
        let mut wire = raw_uz2(&package_bytes(70_000));
        wire.truncate(wire.len() - 10);
        let input = write_file(&tmp, "Cut.u.uz2", &wire);

        let err = decompress(&input, None).unwrap_err();
        assert_eq!(err.kind(), FailureKind::CodecFailure);

        let partial = err.partial().unwrap();
        assert_eq!(partial.chunks_written, 2);
        assert_eq!(partial.bytes_written, 2 * UNCOMPRESSED_CHUNK_SIZE as u64);
        assert!(partial.removed);
        assert!(!tmp.path().join("Cut.u").exists());
    }

    #[test]
    fn corrupted_payload_is_codec_failure() {
        let mut wire = raw_uz2(&package_bytes(1_000));
        let last = wire.len() - 1;
        wire[last] ^= 0xFF; // adler32 trailer

        let err = decompress_stream(Cursor::new(wire), Vec::new(), &CodecConfig::default()).unwrap_err();
        assert_eq!(err.kind(), FailureKind::CodecFailure);
    }

    #[test]
    fn encoder_holds_first_chunk_after_tag_check() {
        let data = package_bytes(40_000);
        let encoder = ChunkEncoder::open(Cursor::new(&data), &CodecConfig::default()).unwrap();
        assert_eq!(encoder.first_chunk(), &data[..UNCOMPRESSED_CHUNK_SIZE]);

        let mut uz2 = Vec::new();
        let report = encoder.encode_into(&mut uz2).unwrap();
        assert_eq!(report.chunks, 2);
        assert_eq!(report.bytes_out, uz2.len() as u64);
    }

    #[test]
    fn tag_gate_checks_only_the_first_chunk() {
        let mut gate = TagGate::default();
        assert!(!gate.is_verified());

        assert!(gate.admit(&FORMAT_TAG[..3]).is_err());
        assert!(!gate.is_verified(), "a rejected chunk leaves the gate pending");

        gate.admit(&package_bytes(10)).unwrap();
        assert!(gate.is_verified());
        gate.admit(&UPSTREAM_TAG).expect("later chunks are not inspected");
        assert!(gate.finish().is_ok());

        assert_eq!(TagGate::Pending.finish().unwrap_err().kind(), FailureKind::InvalidFormatTag);
    }

// # ✅ 5. Stream level and reports

    #[test]
    fn stream_round_trip_with_reports() {
        let original = package_bytes(100_000);
        let config = CodecConfig::default().with_digest(DigestAlg::Blake3);

        let mut uz2 = Vec::new();
        let packed = compress_stream(Cursor::new(&original), &mut uz2, &config).unwrap();
        let mut back = Vec::new();
        let unpacked = decompress_stream(Cursor::new(&uz2), &mut back, &config).unwrap();

        assert_eq!(back, original);
        assert_eq!(packed.bytes_out, uz2.len() as u64);
        assert_eq!(unpacked.bytes_in, uz2.len() as u64);
        assert_eq!(unpacked.bytes_out, original.len() as u64);
        assert_eq!(packed.input_digest, digest_bytes(DigestAlg::Blake3, &original));
        assert_eq!(packed.output_digest, digest_bytes(DigestAlg::Blake3, &uz2));
        assert!(packed.input.is_none());
        assert!(packed.sanity_check());
        assert!(unpacked.sanity_check());
    }

    #[test]
    fn every_level_decodes_with_default_config() {
        let data = package_bytes(40_000);
        for level in [0, 1, 9] {
            let mut uz2 = Vec::new();
            compress_stream(Cursor::new(&data), &mut uz2, &CodecConfig::default().with_level(level)).unwrap();

            let mut back = Vec::new();
            decompress_stream(Cursor::new(uz2), &mut back, &CodecConfig::default()).unwrap();
            assert_eq!(back, data, "level {}", level);
        }
    }

// # ✅ 6. Concurrency

    #[test]
    fn parallel_calls_match_sequential_output() {
        let tmp = tempdir().unwrap();
        let inputs: Vec<(PathBuf, Vec<u8>)> = (0..6)
            .map(|i| {
                let data = package_bytes(20_000 + i * 9_000);
                (write_file(&tmp, &format!("Pkg{}.u", i), &data), data)
            })
            .collect();
        let codec = Uz2Codec::new(CodecConfig::default());

        crossbeam::scope(|s| {
            for (path, _) in &inputs {
                let codec = &codec;
                s.spawn(move |_| codec.compress(path, None).expect("parallel compress"));
            }
        })
        .expect("no thread panicked");

        for (path, data) in &inputs {
            let mut expected = Vec::new();
            compress_stream(Cursor::new(data), &mut expected, codec.config()).unwrap();

            let mut uz2 = path.clone().into_os_string();
            uz2.push(".uz2");
            assert_eq!(fs::read(PathBuf::from(uz2)).unwrap(), expected);
        }
    }

// # ✅ 7. Round-trip identity

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn any_tagged_content_round_trips(body in proptest::collection::vec(any::<u8>(), 0..80_000)) {
            let mut original = FORMAT_TAG.to_vec();
            original.extend_from_slice(&body);

            let mut uz2 = Vec::new();
            let packed = compress_stream(Cursor::new(&original), &mut uz2, &CodecConfig::default()).unwrap();
            let mut back = Vec::new();
            let unpacked = decompress_stream(Cursor::new(&uz2), &mut back, &CodecConfig::default()).unwrap();

            prop_assert_eq!(&back, &original);
            prop_assert_eq!(packed.input_digest, unpacked.output_digest);
            prop_assert_eq!(packed.chunks, original.len().div_ceil(UNCOMPRESSED_CHUNK_SIZE) as u64);
        }
    }
}

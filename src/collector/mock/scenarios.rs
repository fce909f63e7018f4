//! Pre-built mock filesystem scenarios for testing.
//!
//! These scenarios provide realistic `/proc/meminfo` and `/proc/zoneinfo`
//! contents for a few memory conditions.

use super::filesystem::MockFs;

const TYPICAL_MEMINFO: &str = "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          3584000 kB
SwapCached:            0 kB
Active:          4096000 kB
Inactive:        2048000 kB
Active(anon):    2048000 kB
Inactive(anon):   512000 kB
Active(file):    2048000 kB
Inactive(file):  1536000 kB
Unevictable:           0 kB
SwapTotal:       4096000 kB
SwapFree:        4096000 kB
Dirty:              1024 kB
Writeback:             0 kB
Slab:             512000 kB
SReclaimable:     256000 kB
SUnreclaim:       256000 kB
HugePages_Total:       0
HugePages_Free:        0
Hugepagesize:       2048 kB
";

const TYPICAL_ZONEINFO: &str = "\
Node 0, zone      DMA
  per-node stats
      nr_inactive_anon 128000
      nr_active_anon 512000
      nr_inactive_file 384000
      nr_active_file 512000
  pages free     3840
        boost    0
        min      32
        low      40
        high     48
        spanned  4095
        present  3998
        managed  3840
        cma      0
        protection: (0, 2869, 15861, 15861, 15861)
      nr_free_pages 3840
  pagesets
    cpu: 0
              count: 0
              high:  0
              batch: 1
  vm stats threshold: 8
  node_unreclaimable:  0
  start_pfn:           1
Node 0, zone    DMA32
  pages free     512000
        boost    0
        min      2702
        low      3378
        high     4054
        spanned  1044480
        present  782288
        managed  765920
        cma      0
        protection: (0, 0, 12992, 12992, 12992)
  pagesets
    cpu: 0
              count: 12
              high:  378
              batch: 63
  node_unreclaimable:  0
  start_pfn:           4096
Node 0, zone   Normal
  pages free     1532160
        boost    0
        min      13266
        low      16582
        high     19898
        spanned  3407872
        present  3407872
        managed  3325916
        cma      0
        protection: (0, 0, 0, 0, 0)
  pagesets
    cpu: 0
              count: 204
              high:  378
              batch: 63
  node_unreclaimable:  0
  start_pfn:           1048576
Node 0, zone  Movable
  pages free     0
        boost    0
        min      0
        low      0
        high     0
        spanned  0
        present  0
        managed  0
        cma      0
        protection: (0, 0, 0, 0, 0)
";

const NUMA_MEMINFO: &str = "\
MemTotal:       65536000 kB
MemFree:         1000000 kB
MemAvailable:    1100000 kB
Buffers:            4000 kB
Cached:            39001 kB
Active(file):      30001 kB
Inactive(file):     9000 kB
Slab:              80000 kB
SReclaimable:      40001 kB
SUnreclaim:        39999 kB
";

const NUMA_ZONEINFO: &str = "\
Node 0, zone      DMA
  pages free     3968
        min      10
        low      13
        high     16
Node 0, zone    DMA32
  pages free     400000
        min      1600
        low      2000
        high     2400
Node 0, zone   Normal
  pages free     80000
        min      8000
        low      10000
        high     12000
Node 1, zone   Normal
  pages free     96000
        min      9600
        low      12000
        high     14400
";

const PRESSURE_MEMINFO: &str = "\
MemTotal:        2048000 kB
MemFree:           10000 kB
MemAvailable:          0 kB
Cached:              300 kB
Active(file):        200 kB
Inactive(file):      100 kB
SReclaimable:         50 kB
";

const PRESSURE_ZONEINFO: &str = "\
Node 0, zone      DMA
  pages free     20
        min      80
        low      100
        high     120
Node 0, zone   Normal
  pages free     2480
        min      24000
        low      30000
        high     36000
";

impl MockFs {
    /// Creates a typical single-node system with DMA, DMA32, Normal and an
    /// empty Movable zone.
    ///
    /// Low watermarks sum to 20000; the estimate is 11972000 kB available.
    pub fn typical_system() -> Self {
        let mut fs = Self::new();
        fs.add_file("/proc/meminfo", TYPICAL_MEMINFO);
        fs.add_file("/proc/zoneinfo", TYPICAL_ZONEINFO);
        fs
    }

    /// Creates a two-node NUMA system where the page cache is small enough
    /// for its halving to stay below the watermark total.
    ///
    /// Low watermarks sum to 24013; the estimate is 1015489 kB available.
    pub fn numa_system() -> Self {
        let mut fs = Self::new();
        fs.add_file("/proc/meminfo", NUMA_MEMINFO);
        fs.add_file("/proc/zoneinfo", NUMA_ZONEINFO);
        fs
    }

    /// Creates a system whose free memory is already below the summed low
    /// watermarks, with almost nothing left to reclaim.
    pub fn memory_pressure() -> Self {
        let mut fs = Self::new();
        fs.add_file("/proc/meminfo", PRESSURE_MEMINFO);
        fs.add_file("/proc/zoneinfo", PRESSURE_ZONEINFO);
        fs
    }

    /// Creates a typical system whose meminfo lacks the `SReclaimable` line,
    /// as older kernels do.
    pub fn without_reclaimable() -> Self {
        let meminfo: String = TYPICAL_MEMINFO
            .lines()
            .filter(|line| !line.starts_with("SReclaimable:"))
            .map(|line| format!("{line}\n"))
            .collect();

        let mut fs = Self::new();
        fs.add_file("/proc/meminfo", meminfo);
        fs.add_file("/proc/zoneinfo", TYPICAL_ZONEINFO);
        fs
    }
}

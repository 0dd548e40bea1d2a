/*!
# `PRINT "<text>"` or `PRINT <expression>`

## Purpose
Output a string or a number followed by a newline.

## Remarks
Numbers are printed with two digits after the decimal point.

## Example
```text
PRINT "Total:"
PRINT 3 / 4
```
prints
```text
Total:
0.75
```

*/
